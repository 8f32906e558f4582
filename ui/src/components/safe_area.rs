use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SafeAreaProps {
    pub children: Children,
}

/// Keeps content clear of notches and system bars via the
/// `safe-area-inset-*` environment values.
#[function_component]
pub fn SafeArea(props: &SafeAreaProps) -> Html {
    html! {
        <div
            class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
            style="padding: env(safe-area-inset-top) env(safe-area-inset-right) env(safe-area-inset-bottom) env(safe-area-inset-left);"
        >
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}

use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="text-center md:text-left">
                        <span class="text-2xl font-bold tracking-tight">{"Matchpoint"}</span>
                        <p class="text-blue-100 text-sm mt-3 leading-relaxed max-w-md mx-auto md:mx-0">
                            {"Discover tournaments, manage your club's events, and connect with athletes near you."}
                        </p>
                    </div>
                    <div class="text-center md:text-right text-sm text-blue-100 self-end">
                        <p>{"All data stays in your browser. No servers, no accounts leaving your machine."}</p>
                        <p class="mt-1">{format!("© {} Matchpoint", 2024)}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

use crate::auth::AuthContext;
use crate::storage;
use shared::{text_matches, ListingCategory, ListingCondition, MarketListing};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Gear marketplace: a searchable listing grid plus a small posting form for
/// signed-in users. Listings are append-only.
#[function_component(Marketplace)]
pub fn marketplace() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let listings = use_state(Vec::<MarketListing>::new);
    let error = use_state(|| Option::<String>::None);
    let search = use_state(String::new);
    let category = use_state(|| Option::<ListingCategory>::None);
    let show_form = use_state(|| false);

    let form_title = use_state(String::new);
    let form_category = use_state(|| ListingCategory::Equipment);
    let form_condition = use_state(|| ListingCondition::Used);
    let form_price = use_state(String::new);

    let reload = {
        let listings = listings.clone();
        let error = error.clone();
        Callback::from(move |_: ()| match storage::load_listings() {
            Ok(items) => {
                listings.set(items);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            category.set(
                ListingCategory::all()
                    .into_iter()
                    .find(|c| c.as_str() == value),
            );
        })
    };

    let visible: Vec<MarketListing> = listings
        .iter()
        .filter(|l| category.map_or(true, |c| l.category == c))
        .filter(|l| text_matches(&search, &[&l.title, &l.seller, &l.city]))
        .cloned()
        .collect();

    let on_post = {
        let auth = auth.clone();
        let reload = reload.clone();
        let error = error.clone();
        let show_form = show_form.clone();
        let form_title = form_title.clone();
        let form_category = form_category.clone();
        let form_condition = form_condition.clone();
        let form_price = form_price.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(user) = auth.state.user.as_ref() else {
                return;
            };
            // Price is entered in reais, stored in cents.
            let price_cents = match form_price.trim().parse::<f64>() {
                Ok(v) if v >= 0.0 => (v * 100.0).round() as u32,
                _ => {
                    error.set(Some("Price must be a number".to_string()));
                    return;
                }
            };
            let listing = MarketListing {
                id: uuid::Uuid::new_v4().to_string(),
                title: (*form_title).trim().to_string(),
                category: *form_category,
                condition: *form_condition,
                price_cents,
                seller: user.club_name.clone().unwrap_or_else(|| user.name.clone()),
                city: String::new(),
                state: String::new(),
                created_at: chrono::Utc::now(),
            };
            match storage::put_listing(&listing) {
                Ok(()) => {
                    form_title.set(String::new());
                    form_price.set(String::new());
                    show_form.set(false);
                    error.set(None);
                    reload.emit(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let field_class = "w-full px-4 py-3 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    html! {
        <div class="marketplace-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-6xl">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                    <div>
                        <h1 class="text-2xl sm:text-3xl font-bold text-gray-900">{"Marketplace"}</h1>
                        <p class="text-gray-600 mt-1">{"Buy and sell gear with other athletes and clubs"}</p>
                    </div>
                    if auth.state.is_authenticated() {
                        <button
                            onclick={{
                                let show_form = show_form.clone();
                                Callback::from(move |_| show_form.set(!*show_form))
                            }}
                            class="inline-flex items-center px-6 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transition-all"
                        >
                            {if *show_form { "Close" } else { "Post a listing" }}
                        </button>
                    }
                </div>

                if let Some(error) = (*error).as_ref() {
                    <div class="mb-6 bg-red-50 border border-red-200 rounded-xl p-4">
                        <p class="text-sm text-red-600">{error}</p>
                    </div>
                }

                if *show_form {
                    <form onsubmit={on_post} class="bg-white rounded-2xl shadow p-6 mb-8 grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class="sm:col-span-2">
                            <input
                                type="text"
                                class={field_class}
                                placeholder="What are you selling?"
                                value={(*form_title).clone()}
                                oninput={{
                                    let form_title = form_title.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        form_title.set(input.value());
                                    })
                                }}
                            />
                        </div>
                        <select
                            class={field_class}
                            onchange={{
                                let form_category = form_category.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    if let Some(found) = ListingCategory::all()
                                        .into_iter()
                                        .find(|c| c.as_str() == select.value())
                                    {
                                        form_category.set(found);
                                    }
                                })
                            }}
                        >
                            {for ListingCategory::all().iter().map(|c| html! {
                                <option value={c.as_str()} selected={*c == *form_category}>{c.label()}</option>
                            })}
                        </select>
                        <select
                            class={field_class}
                            onchange={{
                                let form_condition = form_condition.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    form_condition.set(if select.value() == "new" {
                                        ListingCondition::New
                                    } else {
                                        ListingCondition::Used
                                    });
                                })
                            }}
                        >
                            <option value="new" selected={*form_condition == ListingCondition::New}>{"New"}</option>
                            <option value="used" selected={*form_condition == ListingCondition::Used}>{"Used"}</option>
                        </select>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            class={field_class}
                            placeholder="Price (R$)"
                            value={(*form_price).clone()}
                            oninput={{
                                let form_price = form_price.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    form_price.set(input.value());
                                })
                            }}
                        />
                        <button
                            type="submit"
                            class="px-6 py-3 text-sm font-semibold text-white bg-blue-600 rounded-xl hover:bg-blue-700 transition-colors"
                        >
                            {"Publish"}
                        </button>
                    </form>
                }

                <div class="flex flex-col sm:flex-row gap-4 mb-8">
                    <input
                        type="text"
                        class={format!("flex-1 {field_class}")}
                        placeholder="Search listings..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <select class={field_class} onchange={on_category}>
                        <option value="" selected={category.is_none()}>{"All categories"}</option>
                        {for ListingCategory::all().iter().map(|c| html! {
                            <option value={c.as_str()} selected={*category == Some(*c)}>{c.label()}</option>
                        })}
                    </select>
                </div>

                if visible.is_empty() {
                    <div class="bg-white rounded-2xl shadow p-12 text-center">
                        <p class="text-gray-600">{"No listings match your search."}</p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for visible.iter().map(|listing| html! {
                            <div class="bg-white rounded-2xl shadow p-6 hover:shadow-lg transition-shadow">
                                <div class="flex items-start justify-between gap-2 mb-2">
                                    <h3 class="text-lg font-semibold text-gray-900">{&listing.title}</h3>
                                    <span class="shrink-0 inline-flex px-2 py-1 text-xs font-medium rounded-full bg-indigo-100 text-indigo-800">
                                        {listing.condition.label()}
                                    </span>
                                </div>
                                <p class="text-sm text-gray-500">{listing.category.label()}</p>
                                <p class="text-2xl font-bold text-gray-900 mt-3">{listing.display_price()}</p>
                                <p class="text-sm text-gray-500 mt-2">
                                    {&listing.seller}
                                    if !listing.city.is_empty() {
                                        {format!(" · {}", listing.city)}
                                    }
                                </p>
                            </div>
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

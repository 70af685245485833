use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use super::icons::Icon;

pub const QUICK_LINKS: [&str; 4] = ["Home", "Shop", "About", "Contact"];
pub const CATEGORIES: [&str; 4] = ["Electronics", "Fashion", "Home", "Beauty"];
pub const SOCIALS: [Icon; 4] = [Icon::Facebook, Icon::Twitter, Icon::Instagram, Icon::Github];

#[component]
fn LinkColumn(title: &'static str, items: [&'static str; 4]) -> impl IntoView {
    view! {
        <div class="col-span-1">
            <h3 class="text-lg font-bold mb-4">{ title }</h3>
            <ul class="space-y-2">
                { items
                    .into_iter()
                    .map(|item| view! {
                        <li>
                            <a
                                href="#"
                                class="inline-block text-gray-400 hover:text-white transition-all hover:translate-x-[5px]"
                            >
                                { item }
                            </a>
                        </li>
                    })
                    .collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full bg-black text-white py-12 border-t-4 border-purple-600">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="col-span-1">
                        <h2 class="text-2xl font-bold font-display mb-4">"BRAND"</h2>
                        <p class="text-gray-400">
                            "Creating the future of online shopping with style and innovation."
                        </p>
                    </div>

                    <LinkColumn title="Quick Links" items=QUICK_LINKS />
                    <LinkColumn title="Categories" items=CATEGORIES />

                    <div class="col-span-1">
                        <h3 class="text-lg font-bold mb-4">"Follow Us"</h3>
                        <div class="flex space-x-4">
                            { SOCIALS
                                .into_iter()
                                .map(|icon| view! {
                                    <a
                                        href="#"
                                        aria-label=icon.label()
                                        class="text-gray-400 hover:text-white transition-all hover:-translate-y-[5px]"
                                    >
                                        { icon.view(24, "") }
                                    </a>
                                })
                                .collect::<Vec<_>>()
                            }
                        </div>
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-gray-800 text-center text-gray-400">
                    <p>"© 2024 BRAND. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

//! Footer Component

use leptos::prelude::*;

const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Company", &["About us", "Team", "Careers", "Blog"]),
    ("Contact", &["Help & Support", "Partner with us", "Ride with us"]),
    ("Legal", &["Terms & Conditions", "Refund & Cancellation", "Privacy Policy", "Cookie Policy"]),
];

const SOCIAL_LINKS: &[&str] = &["Instagram", "Facebook", "Twitter"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                {FOOTER_COLUMNS.iter().map(|(title, links)| view! {
                    <div>
                        <h3 class="footer-title">{*title}</h3>
                        <ul class="footer-links">
                            {links.iter().map(|link| view! {
                                <li><a href="#">{*link}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}

                <div>
                    <h3 class="footer-title">"FOLLOW US"</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS.iter().map(|name| view! {
                            <a href="#" class="social-link" title=*name>{*name}</a>
                        }).collect_view()}
                    </div>
                    <p class="footer-note">"Receive exclusive offers in your mailbox"</p>
                    <form class="newsletter" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                        <input type="email" placeholder="Enter Your email" class="newsletter-input" />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                </div>
            </div>
            <div class="container footer-bottom">
                <span>"All rights Reserved © Your Company, 2021"</span>
                <span>"Made with ❤️ by Themewagon"</span>
            </div>
        </footer>
    }
}

//! Server-rendered presentation shell.
//!
//! Five fixed pages share one layout: a navigation bar that marks the entry for
//! the current path as active, the page body, and a footer. Pages hold no state;
//! the dashboard and contact pages talk to the JSON API from the browser.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// One navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/",
        label: "Home",
    },
    NavItem {
        path: "/about",
        label: "About",
    },
    NavItem {
        path: "/features",
        label: "Features",
    },
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
    },
    NavItem {
        path: "/contact",
        label: "Contact",
    },
];

/// The page views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Features,
    Dashboard,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Features,
        Page::Dashboard,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Features => "/features",
            Page::Dashboard => "/dashboard",
            Page::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Features => "Features",
            Page::Dashboard => "Dashboard",
            Page::Contact => "Contact",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Page::Home => HOME_BODY,
            Page::About => ABOUT_BODY,
            Page::Features => FEATURES_BODY,
            Page::Dashboard => DASHBOARD_BODY,
            Page::Contact => CONTACT_BODY,
        }
    }
}

fn render_nav(current_path: &str) -> String {
    NAV_ITEMS
        .iter()
        .map(|item| {
            if item.path == current_path {
                format!(
                    r#"<a href="{}" class="nav-link active" aria-current="page">{}</a>"#,
                    item.path, item.label
                )
            } else {
                format!(r#"<a href="{}" class="nav-link">{}</a>"#, item.path, item.label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

/// Wraps `body` in the shared layout, highlighting the entry whose path equals `current_path`.
pub fn render_layout(current_path: &str, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | RECIP</title>
    <style>{STYLES}</style>
</head>
<body>
    <nav class="navbar">
        <div class="brand">RECIP</div>
        <div class="nav-links">
          {nav}
        </div>
    </nav>
    <main>
{body}
    </main>
    <footer>
        <p>&copy; 2024 RECIP. Real-Time Explainable Credit Intelligence Platform.</p>
    </footer>
</body>
</html>
"#,
        nav = render_nav(current_path),
    )
}

pub fn render_page(page: Page) -> String {
    render_layout(page.path(), page.title(), page.body())
}

pub async fn home_page() -> Html<String> {
    Html(render_page(Page::Home))
}

pub async fn about_page() -> Html<String> {
    Html(render_page(Page::About))
}

pub async fn features_page() -> Html<String> {
    Html(render_page(Page::Features))
}

pub async fn dashboard_page() -> Html<String> {
    Html(render_page(Page::Dashboard))
}

pub async fn contact_page() -> Html<String> {
    Html(render_page(Page::Contact))
}

/// Fallback for any unrouted path. Rendered in the layout with no active entry.
pub async fn not_found_page() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(render_layout("", "Not Found", NOT_FOUND_BODY)),
    )
}

const STYLES: &str = r#"
body { margin: 0; min-height: 100vh; background: #111827; color: #fff; font-family: system-ui, sans-serif; }
.navbar { display: flex; justify-content: space-between; align-items: center; height: 4rem; padding: 0 2rem; background: rgba(31,41,55,.9); border-bottom: 1px solid #374151; position: sticky; top: 0; }
.brand { font-size: 1.25rem; font-weight: 700; color: #60a5fa; }
.nav-links { display: flex; gap: 2rem; }
.nav-link { color: #d1d5db; text-decoration: none; padding: .5rem .75rem; border-radius: .5rem; }
.nav-link:hover { color: #fff; background: rgba(55,65,81,.5); }
.nav-link.active { color: #60a5fa; background: rgba(37,99,235,.2); border: 1px solid rgba(59,130,246,.3); }
main { max-width: 80rem; margin: 0 auto; padding: 2rem; }
section { margin-bottom: 2rem; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: .5rem; border-bottom: 1px solid #374151; text-align: left; }
form { display: grid; gap: 1rem; max-width: 32rem; }
input, textarea { padding: .5rem; background: #1f2937; color: #fff; border: 1px solid #374151; border-radius: .375rem; }
footer { margin-top: 5rem; padding: 2rem; background: #1f2937; border-top: 1px solid #374151; text-align: center; color: #9ca3af; }
"#;

const HOME_BODY: &str = r#"        <section>
            <h1>Real-Time Explainable Credit Intelligence</h1>
            <p>Track credit scores, monthly trends, credit events and alerts in one place.</p>
            <p><a href="/dashboard" class="cta">Open the dashboard</a></p>
        </section>"#;

const ABOUT_BODY: &str = r#"        <section>
            <h1>About RECIP</h1>
            <p>RECIP turns raw credit observations into explainable signals: every score on the
            dashboard is backed by the events and market context around it.</p>
        </section>"#;

const FEATURES_BODY: &str = r#"        <section>
            <h1>Features</h1>
            <ul>
                <li>Latest credit score observations</li>
                <li>Six-month score trends by month</li>
                <li>Credit event timeline</li>
                <li>Unread alert inbox</li>
                <li>Market sentiment snapshot</li>
            </ul>
        </section>"#;

const DASHBOARD_BODY: &str = r#"        <h1>Dashboard</h1>
        <section><h2>Recent Scores</h2><table id="scores"></table></section>
        <section><h2>Trends</h2><table id="trends"></table></section>
        <section><h2>Credit Events</h2><table id="events"></table></section>
        <section><h2>Unread Alerts</h2><table id="alerts"></table></section>
        <section><h2>Market Snapshot</h2><table id="financial-data"></table></section>
        <script>
            const panels = {
                scores: ["score_date", "score"],
                trends: ["month", "avg_score", "count"],
                events: ["event_date", "event_type", "title"],
                alerts: ["created_at", "severity", "message"],
                "financial-data": ["symbol", "price", "change_percent", "sentiment_score"],
            };
            for (const [name, columns] of Object.entries(panels)) {
                const table = document.getElementById(name);
                fetch("/api/" + name)
                    .then((r) => r.json())
                    .then((body) => {
                        if (!body.success) {
                            table.innerHTML = "<tr><td></td></tr>";
                            table.rows[0].cells[0].textContent = body.error;
                            return;
                        }
                        const head = table.insertRow();
                        columns.forEach((c) => { head.insertCell().textContent = c; });
                        body.data.forEach((row) => {
                            const tr = table.insertRow();
                            columns.forEach((c) => { tr.insertCell().textContent = row[c]; });
                        });
                    });
            }
        </script>"#;

const CONTACT_BODY: &str = r#"        <h1>Contact</h1>
        <form id="contact-form">
            <input name="name" placeholder="Name">
            <input name="email" type="email" placeholder="Email">
            <input name="subject" placeholder="Subject">
            <textarea name="message" rows="6" placeholder="Message"></textarea>
            <button type="submit">Send</button>
        </form>
        <p id="contact-status"></p>
        <script>
            document.getElementById("contact-form").addEventListener("submit", (event) => {
                event.preventDefault();
                const status = document.getElementById("contact-status");
                const payload = Object.fromEntries(new FormData(event.target));
                fetch("/api/contact", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify(payload),
                })
                    .then((r) => r.json())
                    .then((body) => {
                        if (body.success) {
                            status.textContent = body.message;
                            event.target.reset();
                        } else if (body.error && body.error.issues) {
                            status.textContent = body.error.issues
                                .map((i) => i.path.join(".") + ": " + i.message)
                                .join("; ");
                        } else {
                            status.textContent = body.error;
                        }
                    });
            });
        </script>"#;

const NOT_FOUND_BODY: &str = r#"        <section>
            <h1>Page not found</h1>
            <p><a href="/">Back to home</a></p>
        </section>"#;

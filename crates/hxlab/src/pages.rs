//! Full-page documents: the index and the standalone showcase pages.
//!
//! Both are assembled from the same fragments the exercise endpoints return,
//! so the initial markup of a page is exactly what a reset would swap in.

use std::fmt::Write as _;

use crate::addressing::{Resolver, endpoints};
use crate::contact::Contact;
use crate::fragments::{CLOCK_PLACEHOLDER, ContactView, Fragment, Trigger};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// The six exercises, in teaching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    ClickToChange,
    ClickToLoad,
    Polling,
    Echo,
    FormSubmission,
    ClickToEdit,
}

impl Exercise {
    pub const ALL: [Exercise; 6] = [
        Exercise::ClickToChange,
        Exercise::ClickToLoad,
        Exercise::Polling,
        Exercise::Echo,
        Exercise::FormSubmission,
        Exercise::ClickToEdit,
    ];

    /// Parses `exercise1` .. `exercise6`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let n: usize = slug.strip_prefix("exercise")?.parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn slug(self) -> String {
        format!("exercise{}", self.number())
    }

    pub fn title(self) -> &'static str {
        match self {
            Exercise::ClickToChange => "Click to Change Text",
            Exercise::ClickToLoad => "Click to Load Content",
            Exercise::Polling => "Polling for Updates",
            Exercise::Echo => "Send User Input",
            Exercise::FormSubmission => "Form Submission & Loading Indicators",
            Exercise::ClickToEdit => "Click To Edit",
        }
    }

    fn summary(self, poll_interval_secs: u64) -> String {
        match self {
            Exercise::ClickToChange => "Click the button below to see it change!".to_string(),
            Exercise::ClickToLoad => {
                "Click the button to load content from the server into the target div.".to_string()
            }
            Exercise::Polling => format!(
                "This div automatically updates every {poll_interval_secs} seconds with the current server time."
            ),
            Exercise::Echo => "Type in the input field below. The server will echo your input \
                               with a 500ms delay after you stop typing."
                .to_string(),
            Exercise::FormSubmission => "Submit the form below. Notice the loading spinner \
                                         that appears during submission."
                .to_string(),
            Exercise::ClickToEdit => "Click \"Click To Edit\" to switch to edit mode. \
                                      The server controls the UI state."
                .to_string(),
        }
    }

    /// Source of the route module that serves this exercise.
    pub fn handler_source(self) -> &'static str {
        match self {
            Exercise::ClickToChange => include_str!("routes/exercise1.rs"),
            Exercise::ClickToLoad => include_str!("routes/exercise2.rs"),
            Exercise::Polling => include_str!("routes/exercise3.rs"),
            Exercise::Echo => include_str!("routes/exercise4.rs"),
            Exercise::FormSubmission => include_str!("routes/exercise5.rs"),
            Exercise::ClickToEdit => include_str!("routes/exercise6.rs"),
        }
    }

    /// Interactive markup of the exercise: its initial fragment plus a reset
    /// control.
    fn demo(self, resolver: &Resolver, poll_interval_secs: u64, contact: &Contact) -> String {
        match self {
            Exercise::ClickToChange => format!(
                "{}\
                <div class=\"mt-3\">{}</div>",
                Fragment::ClickButton(Trigger::Reset).render(resolver),
                reset_button(resolver.resolve(endpoints::CLICK_RESET), "#ex1-target", true),
            ),
            Exercise::ClickToLoad => format!(
                "<button class=\"btn btn-primary\" hx-get=\"{}\" hx-target=\"#ex2-target\">Load Content</button>\
                <div id=\"ex2-target\" class=\"mt-3 p-3 bg-light rounded border\" style=\"min-height: 50px;\">{}</div>\
                <div class=\"mt-3\">{}</div>",
                resolver.resolve(endpoints::LOAD),
                Fragment::LoadedContent(Trigger::Reset).render(resolver),
                reset_button(resolver.resolve(endpoints::LOAD_RESET), "#ex2-target", false),
            ),
            Exercise::Polling => format!(
                "<div id=\"ex3-clock\" class=\"alert alert-info\" hx-get=\"{}\" hx-trigger=\"load, every {poll_interval_secs}s\">{CLOCK_PLACEHOLDER}</div>\
                <div class=\"mt-3\">{}</div>",
                resolver.resolve(endpoints::CLOCK),
                reset_button(resolver.resolve(endpoints::CLOCK_RESET), "#ex3-clock", false),
            ),
            Exercise::Echo => format!(
                "<div class=\"mb-3\">\
                    <label for=\"user-input\" class=\"form-label\">Type something:</label>\
                    <input type=\"text\" id=\"user-input\" class=\"form-control\" name=\"user-input\" \
                        hx-get=\"{}\" hx-trigger=\"keyup changed delay:500ms\" hx-target=\"#ex4-output\" \
                        placeholder=\"Type here...\">\
                </div>\
                <div class=\"mt-2\">Server response: <strong id=\"ex4-output\" class=\"text-primary\"></strong></div>\
                <div class=\"mt-3\">\
                    <button class=\"btn btn-secondary\" hx-get=\"{}\" hx-target=\"#ex4-output\" \
                        onclick=\"document.getElementById('user-input').value = ''\">Reset</button>\
                </div>",
                resolver.resolve(endpoints::ECHO),
                resolver.resolve(endpoints::ECHO_RESET),
            ),
            Exercise::FormSubmission => format!(
                "{}\
                <div class=\"mt-3\">{}</div>",
                Fragment::Signup(Trigger::Reset).render(resolver),
                reset_button(resolver.resolve(endpoints::SIGNUP_RESET), "#ex5-response", true),
            ),
            Exercise::ClickToEdit => format!(
                "{}\
                <div class=\"mt-3\">{}</div>",
                Fragment::Contact(ContactView::Display, contact).render(resolver),
                reset_button(resolver.resolve(endpoints::CONTACT_RESET), "#contact-1", true),
            ),
        }
    }
}

fn reset_button(url: impl std::fmt::Display, target: &str, outer: bool) -> String {
    let swap = if outer { " hx-swap=\"outerHTML\"" } else { "" };
    format!(
        "<button class=\"btn btn-secondary\" hx-get=\"{url}\" hx-target=\"{target}\"{swap}>Reset</button>"
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
    <meta charset=\"UTF-8\">\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
    <title>{title}</title>\n\
    <link href=\"{BOOTSTRAP_CSS}\" rel=\"stylesheet\">\n\
    <script src=\"{HTMX_SRC}\"></script>\n\
    <style>\n\
        .htmx-indicator {{ display: none; }}\n\
        .htmx-request .htmx-indicator {{ display: inline-block; }}\n\
    </style>\n\
</head>\n\
<body>\n\
    <div class=\"container mt-5\">\n\
{body}\n\
    </div>\n\
</body>\n\
</html>\n"
    )
}

/// Renders the index page with one card per exercise.
///
/// `contact` is the current record so the click-to-edit card matches what a
/// cancel would show.
pub fn render_index(resolver: &Resolver, poll_interval_secs: u64, contact: &Contact) -> String {
    let mut body = String::from(
        "<h1 class=\"mb-2\">htmx exercises</h1>\
        <p class=\"lead mb-4\">Each action asks the server for a fragment of HTML that replaces part of this page.</p>",
    );

    for exercise in Exercise::ALL {
        let n = exercise.number();
        let _ = write!(
            body,
            "<section class=\"card mb-4\" id=\"{slug}\">\
                <div class=\"card-body\">\
                    <h2 class=\"h4 card-title\">Exercise {n}: {title}</h2>\
                    <p>{summary}</p>\
                    {demo}\
                    <p class=\"mt-3 mb-0 small\">\
                        <a href=\"/code/{slug}\">Standalone page</a> · \
                        <a href=\"/code/{slug}/rust\">Handler source</a>\
                    </p>\
                </div>\
            </section>",
            slug = exercise.slug(),
            title = exercise.title(),
            summary = exercise.summary(poll_interval_secs),
            demo = exercise.demo(resolver, poll_interval_secs, contact),
        );
    }

    document("htmx exercises", &body)
}

/// Renders the standalone page for one exercise.
///
/// Showcase pages are meant to be saved and opened from disk, so callers pass
/// a public resolver.
pub fn render_showcase(exercise: Exercise, resolver: &Resolver, poll_interval_secs: u64) -> String {
    let title = format!("Exercise {}: {}", exercise.number(), exercise.title());
    let body = format!(
        "<h1>{title}</h1>\
        <p>{}</p>\
        {}",
        exercise.summary(poll_interval_secs),
        exercise.demo(resolver, poll_interval_secs, &Contact::default()),
    );
    document(&title, &body)
}

//! Server-side HTML fragment rendering.
//!
//! Each exercise has a small family of fragments. A [`Fragment`] names the
//! family, the variant and the data it needs; [`Fragment::render`] turns it
//! into markup with every action address produced by the [`Resolver`].
//!
//! User-provided content is escaped. Resolved addresses are inserted verbatim.

use chrono::NaiveTime;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::addressing::{Resolver, endpoints};
use crate::contact::Contact;

/// Placeholder shown before the first clock poll lands.
pub const CLOCK_PLACEHOLDER: &str = "Loading server time...";

/// Content returned by the click-to-load exercise.
pub const LOADED_CONTENT: &str = "Hello, HTMX! This content was loaded from the server. 🎉";

/// Active/reset selector for the stateless exercises. `Active` carries the
/// value computed for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<T = ()> {
    Active(T),
    Reset,
}

/// Representation of the click-to-edit contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactView {
    Display,
    Edit,
}

/// Variant tag, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Active,
    Reset,
    Display,
    Edit,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Active => "active",
            Variant::Reset => "reset",
            Variant::Display => "display",
            Variant::Edit => "edit",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fragment family together with its variant and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Exercise 1: a button that swaps itself.
    ClickButton(Trigger),
    /// Exercise 2: content loaded into a target.
    LoadedContent(Trigger),
    /// Exercise 3: polled server time.
    ServerTime(Trigger<NaiveTime>),
    /// Exercise 4: echo of the text typed by the user.
    Echo(Trigger<&'a str>),
    /// Exercise 5: the form, or the acknowledgement for the submitted name.
    Signup(Trigger<&'a str>),
    /// Exercise 6: the contact record in display or edit form.
    Contact(ContactView, &'a Contact),
}

impl Fragment<'_> {
    /// Name of the fragment family.
    pub fn family(&self) -> &'static str {
        match self {
            Fragment::ClickButton(_) => "click-button",
            Fragment::LoadedContent(_) => "loaded-content",
            Fragment::ServerTime(_) => "server-time",
            Fragment::Echo(_) => "echo",
            Fragment::Signup(_) => "signup",
            Fragment::Contact(..) => "contact",
        }
    }

    pub fn variant(&self) -> Variant {
        fn trigger<T>(t: &Trigger<T>) -> Variant {
            match t {
                Trigger::Active(_) => Variant::Active,
                Trigger::Reset => Variant::Reset,
            }
        }

        match self {
            Fragment::ClickButton(t) | Fragment::LoadedContent(t) => trigger(t),
            Fragment::ServerTime(t) => trigger(t),
            Fragment::Echo(t) | Fragment::Signup(t) => trigger(t),
            Fragment::Contact(ContactView::Display, _) => Variant::Display,
            Fragment::Contact(ContactView::Edit, _) => Variant::Edit,
        }
    }

    /// Renders the fragment. All addresses come from `resolver`.
    pub fn render(&self, resolver: &Resolver) -> String {
        match *self {
            Fragment::ClickButton(trigger) => render_click_button(trigger, resolver),
            Fragment::LoadedContent(Trigger::Active(())) => LOADED_CONTENT.to_string(),
            Fragment::LoadedContent(Trigger::Reset) => String::new(),
            Fragment::ServerTime(Trigger::Active(now)) => render_server_time(now),
            Fragment::ServerTime(Trigger::Reset) => CLOCK_PLACEHOLDER.to_string(),
            Fragment::Echo(Trigger::Active(input)) => render_echo(input),
            Fragment::Echo(Trigger::Reset) => String::new(),
            Fragment::Signup(Trigger::Active(name)) => render_signup_received(name),
            Fragment::Signup(Trigger::Reset) => render_signup_form(resolver),
            Fragment::Contact(ContactView::Display, contact) => {
                render_contact_display(contact, resolver)
            }
            Fragment::Contact(ContactView::Edit, contact) => render_contact_edit(contact, resolver),
        }
    }
}

fn render_click_button(trigger: Trigger, resolver: &Resolver) -> String {
    let (class, label) = match trigger {
        Trigger::Active(()) => ("btn-success", "Clicked! ✅"),
        Trigger::Reset => ("btn-primary", "Click Me"),
    };
    format!(
        "<button id=\"ex1-target\" class=\"btn {class}\" hx-post=\"{}\" hx-swap=\"outerHTML\">{label}</button>",
        resolver.resolve(endpoints::CLICK)
    )
}

/// Formats the time on a 12-hour clock, e.g. `03:04:05 PM`.
fn render_server_time(now: NaiveTime) -> String {
    format!("Server time is: <strong>{}</strong>", now.format("%I:%M:%S %p"))
}

fn render_echo(input: &str) -> String {
    format!("You typed: <strong>{}</strong>", encode_text(input))
}

fn render_signup_received(name: &str) -> String {
    format!(
        "<div class=\"alert alert-success\" id=\"ex5-response\">\
            Thank you, {}! Your message has been received.\
        </div>",
        encode_text(name)
    )
}

fn render_signup_form(resolver: &Resolver) -> String {
    format!(
        "<div id=\"ex5-response\">\
            <form hx-post=\"{}\" hx-target=\"#ex5-response\" hx-swap=\"outerHTML\" hx-indicator=\"#ex5-indicator\">\
                <div class=\"mb-3\">\
                    <label for=\"name\" class=\"form-label\">Name</label>\
                    <input type=\"text\" id=\"name\" name=\"name\" class=\"form-control\" required>\
                </div>\
                <button type=\"submit\" class=\"btn btn-success\">\
                    Submit <span class=\"spinner-border spinner-border-sm htmx-indicator\" id=\"ex5-indicator\"></span>\
                </button>\
            </form>\
        </div>",
        resolver.resolve(endpoints::SIGNUP_SUBMIT)
    )
}

fn render_contact_display(contact: &Contact, resolver: &Resolver) -> String {
    format!(
        "<div id=\"contact-1\" class=\"p-2 border rounded\" hx-target=\"this\" hx-swap=\"outerHTML\">\
            <p class=\"mb-1\"><strong>Name:</strong> {}</p>\
            <p class=\"mb-2\"><strong>Email:</strong> {}</p>\
            <button class=\"btn btn-primary btn-sm\" hx-get=\"{}\">Click To Edit</button>\
        </div>",
        encode_text(&contact.name),
        encode_text(&contact.email),
        resolver.resolve(endpoints::CONTACT)
    )
}

fn render_contact_edit(contact: &Contact, resolver: &Resolver) -> String {
    format!(
        "<div id=\"contact-1\" hx-target=\"this\" hx-swap=\"outerHTML\">\
            <form class=\"p-2 border rounded\" hx-put=\"{action}\">\
                <div class=\"mb-2\">\
                    <label class=\"form-label small\">Name</label>\
                    <input type=\"text\" name=\"name\" class=\"form-control form-control-sm\" value=\"{name}\">\
                </div>\
                <div class=\"mb-3\">\
                    <label class=\"form-label small\">Email</label>\
                    <input type=\"email\" name=\"email\" class=\"form-control form-control-sm\" value=\"{email}\">\
                </div>\
                <button type=\"submit\" class=\"btn btn-success btn-sm\">Save</button>\
                <button type=\"button\" class=\"btn btn-secondary btn-sm\" hx-get=\"{cancel}\" hx-target=\"#contact-1\" hx-swap=\"outerHTML\">Cancel</button>\
            </form>\
        </div>",
        action = resolver.resolve(endpoints::CONTACT),
        cancel = resolver.resolve(endpoints::CONTACT_VIEW),
        name = encode_double_quoted_attribute(&contact.name),
        email = encode_double_quoted_attribute(&contact.email),
    )
}

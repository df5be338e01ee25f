//! Render command - prints one fragment to stdout.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use hxlab::{Contact, ContactView, Fragment, Resolver, Trigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FragmentKind {
    /// Exercise 1 button.
    Button,
    /// Exercise 2 loaded content.
    Content,
    /// Exercise 3 server time.
    Clock,
    /// Exercise 4 echo.
    Echo,
    /// Exercise 5 signup form or acknowledgement.
    Form,
    /// Exercise 6 contact.
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Active,
    Reset,
    Display,
    Edit,
}

/// Renders `fragment` with a public resolver when `public_base` is set,
/// relative addresses otherwise.
pub fn run(
    fragment: FragmentKind,
    variant: Option<VariantArg>,
    public_base: Option<&str>,
    input: &str,
) -> Result<()> {
    let resolver = resolver(public_base)?;
    println!("{}", render(fragment, variant, &resolver, input)?);
    Ok(())
}

fn resolver(public_base: Option<&str>) -> Result<Resolver> {
    match public_base {
        Some(base) => {
            hxlab_config::validate_base_url(base).context("Invalid --base-url")?;
            Ok(Resolver::public(base))
        }
        None => Ok(Resolver::local()),
    }
}

fn render(
    fragment: FragmentKind,
    variant: Option<VariantArg>,
    resolver: &Resolver,
    input: &str,
) -> Result<String> {
    let contact = Contact::default();

    let fragment = match fragment {
        FragmentKind::Contact => Fragment::Contact(contact_view(variant)?, &contact),
        FragmentKind::Button => Fragment::ClickButton(trigger(fragment, variant, ())?),
        FragmentKind::Content => Fragment::LoadedContent(trigger(fragment, variant, ())?),
        FragmentKind::Clock => {
            Fragment::ServerTime(trigger(fragment, variant, chrono::Local::now().time())?)
        }
        FragmentKind::Echo => Fragment::Echo(trigger(fragment, variant, input)?),
        FragmentKind::Form => Fragment::Signup(trigger(fragment, variant, input)?),
    };

    Ok(fragment.render(resolver))
}

fn contact_view(variant: Option<VariantArg>) -> Result<ContactView> {
    match variant.unwrap_or(VariantArg::Display) {
        VariantArg::Display => Ok(ContactView::Display),
        VariantArg::Edit => Ok(ContactView::Edit),
        other => bail!("Fragment Contact has no {other:?} variant; use display or edit"),
    }
}

fn trigger<T>(fragment: FragmentKind, variant: Option<VariantArg>, value: T) -> Result<Trigger<T>> {
    match variant.unwrap_or(VariantArg::Active) {
        VariantArg::Active => Ok(Trigger::Active(value)),
        VariantArg::Reset => Ok(Trigger::Reset),
        other => bail!("Fragment {fragment:?} has no {other:?} variant; use active or reset"),
    }
}

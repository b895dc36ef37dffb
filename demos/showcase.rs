//! Generates the demo pages: a light and a dark rendition of the button
//! showcase, the token stylesheet, and a catalog manifest.
//!
//! Usage: `cargo run --example showcase [out-dir]` (default `target/showcase`).

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use quartz_theme::{Theme, css_variables};
use quartz_ui::{
    catalog::button_stories,
    components::{Button, ButtonSize, ButtonVariant, IconKind},
    theme::{init_theme, root_class_attr, theme_mode, toggle_theme},
};

fn main() -> Result<()> {
    let out_dir = env::args().nth(1).unwrap_or_else(|| "target/showcase".to_owned());
    let out_dir = Path::new(&out_dir);
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    init_theme(None, None);

    fs::write(out_dir.join("tokens.css"), css_variables(&Theme::DEFAULT))?;

    let manifest = serde_json::to_string_pretty(&button_stories())?;
    fs::write(out_dir.join("stories.json"), manifest)?;

    fs::write(out_dir.join("index.html"), page())?;

    toggle_theme();
    fs::write(out_dir.join("dark.html"), page())?;

    simulate_interactions();

    println!("showcase written to {}", out_dir.display());
    Ok(())
}

fn page() -> String {
    let mut body = String::new();

    body.push_str(&section("Button Variants", &row(
        ButtonVariant::ALL.map(|variant| {
            Button::new(variant.name())
                .variant(variant)
                .text(title_case(variant.name()))
                .render()
        }),
    )));

    body.push_str(&section("Button Sizes", &row([
        Button::new("size-xs").size(ButtonSize::Xs).text("Extra Small").render(),
        Button::new("size-sm").size(ButtonSize::Sm).text("Small").render(),
        Button::new("size-default").text("Default").render(),
        Button::new("size-lg").size(ButtonSize::Lg).text("Large").render(),
    ])));

    body.push_str(&section("Buttons with Icons", &row([
        Button::new("email").icon(IconKind::Mail).text("Email").render(),
        Button::new("download")
            .variant(ButtonVariant::Secondary)
            .icon(IconKind::Download)
            .text("Download")
            .render(),
        Button::new("add-item")
            .variant(ButtonVariant::Outline)
            .icon(IconKind::Plus)
            .text("Add Item")
            .render(),
        Button::new("delete")
            .variant(ButtonVariant::Destructive)
            .icon(IconKind::Trash)
            .text("Delete")
            .render(),
        Button::new("complete")
            .variant(ButtonVariant::Ghost)
            .icon(IconKind::Check)
            .text("Complete")
            .render(),
    ])));

    body.push_str(&section("Icon Buttons", &row([
        Button::new("icon-xs")
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::IconXs)
            .icon(IconKind::Heart)
            .render(),
        Button::new("icon-sm")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::IconSm)
            .icon(IconKind::Settings)
            .render(),
        Button::new("icon-default").size(ButtonSize::Icon).icon(IconKind::Download).render(),
        Button::new("icon-lg")
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::IconLg)
            .icon(IconKind::Plus)
            .render(),
    ])));

    body.push_str(&section("Button States", &row([
        Button::new("active").text("Active").render(),
        Button::new("inactive").text("Disabled").disabled(true).render(),
        Button::new("active-outline").variant(ButtonVariant::Outline).text("Active Outline").render(),
        Button::new("inactive-outline")
            .variant(ButtonVariant::Outline)
            .text("Disabled Outline")
            .disabled(true)
            .render(),
    ])));

    let toggle_icon = if theme_mode().is_dark() { IconKind::Sun } else { IconKind::Moon };
    let toggle = Button::new("theme-toggle")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Icon)
        .icon(toggle_icon)
        .render();

    format!(
        "<!doctype html>\n<html class=\"{root}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>quartz_ui showcase</title>\n<link rel=\"stylesheet\" href=\"tokens.css\">\n</head>\n\
         <body class=\"min-h-screen bg-background text-foreground transition-colors\">\n\
         <header class=\"flex items-center justify-between mb-12\">\n\
         <h1 class=\"text-4xl font-bold\">quartz_ui</h1>\n{toggle}\n</header>\n{body}</body>\n</html>\n",
        root = root_class_attr(),
    )
}

fn section(heading: &str, content: &str) -> String {
    format!(
        "<section class=\"mb-12\">\n<h2 class=\"text-2xl font-semibold mb-6\">{heading}</h2>\n\
         <div class=\"bg-card border border-border rounded-lg p-6\">\n{content}</div>\n</section>\n"
    )
}

fn row(buttons: impl IntoIterator<Item = String>) -> String {
    let mut out = String::from("<div class=\"flex flex-wrap items-center gap-4\">\n");
    for button in buttons {
        out.push_str(&button);
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Walks the interactive demo through its confirmation flow on stdout.
fn simulate_interactions() {
    let delete = Button::new("delete-item")
        .variant(ButtonVariant::Destructive)
        .icon(IconKind::Trash)
        .text("Delete")
        .confirm("Are you sure you want to delete?")
        .on_click(|| println!("  -> item deleted"));

    println!("interactive demo:");

    println!("  click `Delete`, declining the confirmation:");
    let fired = delete.click(|message| {
        println!("  confirm: {message} [declined]");
        false
    });
    println!("  handler ran: {fired}");

    println!("  click `Delete`, accepting the confirmation:");
    let fired = delete.click(|message| {
        println!("  confirm: {message} [accepted]");
        true
    });
    println!("  handler ran: {fired}");
}

//! Show or change the theme preference

use anyhow::Result;

use crate::theme::{current_theme, set_theme, toggle_theme, Theme};
use crate::Blog;

/// `None` prints the current theme, `toggle` flips it, `light`/`dark` set it
pub fn run(blog: &Blog, action: Option<&str>) -> Result<()> {
    let store = blog.preferences();
    let fallback: Theme = blog.config.theme.parse().unwrap_or(Theme::Light);

    let theme = match action {
        None => current_theme(&store, fallback),
        Some("toggle") => toggle_theme(&store, fallback),
        Some(name) => {
            let theme: Theme = name.parse()?;
            set_theme(&store, theme);
            theme
        }
    };

    println!("{}", theme);
    Ok(())
}

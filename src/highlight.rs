use inksac::prelude::*;

/// Terminal colors for the prompt and diagnostics; everything degrades to plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        let color_support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self { color_support }
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors a `user@host:cwd$ ` prompt: identity in green, directory in blue.
    pub fn prompt(&self, prompt: &str) -> String {
        if self.is_plain() {
            return prompt.to_string();
        }

        let Some((identity, rest)) = prompt.split_once(':') else {
            return prompt.to_string();
        };

        let identity_style = Style::builder().foreground(Color::Green).bold().build();
        let path_style = Style::builder().foreground(Color::Blue).bold().build();

        match rest.rsplit_once('$') {
            Some((path, tail)) => format!(
                "{}:{}${}",
                identity.style(identity_style),
                path.style(path_style),
                tail
            ),
            None => format!("{}:{}", identity.style(identity_style), rest.style(path_style)),
        }
    }

    pub fn error(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }
}

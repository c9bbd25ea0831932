/// Key under which the chosen theme is persisted in browser storage.
pub const STORAGE_KEY: &str = "theme";

/// Light/dark choice shared through context. The root layout mirrors it into
/// the `data-theme` attribute that daisyUI styles against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Theme name as written to `data-theme` and browser storage.
    pub fn name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the theme toggle round trip.
    ///
    /// Expected: light is the default, toggling flips the persisted name in
    /// both directions.
    #[test]
    fn toggle_flips_between_names() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.name(), "light");

        theme.toggle();
        assert_eq!(theme.name(), "dark");

        theme.toggle();
        assert_eq!(theme.name(), "light");
    }
}

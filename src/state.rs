//! View state for the page: theme selection and mobile menu visibility.
//!
//! Both are two-state toggles owned by a single page-view instance. Nothing
//! here is persisted; both reset to their defaults on every page load.

/// Light vs. dark palette selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Total over both states; cannot fail.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Marker class on the page root that scopes Tailwind `dark:` variants.
    pub fn scope_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "",
            ThemeMode::Dark => "dark",
        }
    }

    /// Base palette for the page surface. Every palette-dependent element
    /// below the root derives from this plus `dark:` variants, so the whole
    /// page flips in one render pass.
    pub fn surface_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "min-h-screen bg-stone-50 text-slate-800",
            ThemeMode::Dark => "min-h-screen bg-slate-900 text-slate-100",
        }
    }
}

/// Whether the narrow-layout navigation list is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    #[default]
    Closed,
    Open,
}

impl MenuVisibility {
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuVisibility::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(MenuVisibility::default(), MenuVisibility::Closed);
    }

    #[test]
    fn test_theme_toggle_parity() {
        let mut theme = ThemeMode::default();
        for n in 1..=10 {
            theme = theme.toggled();
            if n % 2 == 1 {
                assert_eq!(theme, ThemeMode::Dark, "odd toggle count {n}");
            } else {
                assert_eq!(theme, ThemeMode::Light, "even toggle count {n}");
            }
        }
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut menu = MenuVisibility::default();
        for n in 1..=10 {
            menu = menu.toggled();
            if n % 2 == 1 {
                assert_eq!(menu, MenuVisibility::Open, "odd toggle count {n}");
            } else {
                assert_eq!(menu, MenuVisibility::Closed, "even toggle count {n}");
            }
        }
    }

    /// What every nav-link activation does to the menu state.
    fn close(menu: &mut MenuVisibility) {
        *menu = MenuVisibility::Closed;
    }

    #[test]
    fn test_forcing_menu_closed_is_idempotent() {
        let mut menu = MenuVisibility::default();
        menu = menu.toggled();
        close(&mut menu);
        assert_eq!(menu, MenuVisibility::Closed);
        close(&mut menu);
        assert_eq!(menu, MenuVisibility::Closed);
    }

    #[test]
    fn test_theme_and_menu_are_independent() {
        // Interleave the two toggles; each tracks only its own parity.
        let mut theme = ThemeMode::default();
        let mut menu = MenuVisibility::default();

        theme = theme.toggled();
        assert_eq!(menu, MenuVisibility::Closed);

        menu = menu.toggled();
        assert_eq!(theme, ThemeMode::Dark);

        theme = theme.toggled();
        theme = theme.toggled();
        assert_eq!(menu, MenuVisibility::Open);
        assert_eq!(theme, ThemeMode::Dark);
    }

    #[test]
    fn test_open_menu_closes_on_link_activation() {
        let mut menu = MenuVisibility::default();
        menu = menu.toggled();
        assert!(menu.is_open());
        // Following a nav link forces Closed regardless of theme.
        close(&mut menu);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_surface_classes_are_distinct_and_nonempty() {
        assert!(!ThemeMode::Light.surface_class().is_empty());
        assert!(!ThemeMode::Dark.surface_class().is_empty());
        assert_ne!(
            ThemeMode::Light.surface_class(),
            ThemeMode::Dark.surface_class()
        );
        assert_eq!(ThemeMode::Dark.scope_class(), "dark");
    }
}

//! Environment themes
//!
//! The catalog of scene presets and the rotation a theme button steps through.
//! Both are plain values handed to whoever renders the scene.

use thiserror::Error;

/// Lighting and preset for one environment
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub preset: &'static str,
    pub ambient_color: &'static str,
    pub directional_color: &'static str,
    pub ambient_intensity: f32,
    pub light_intensity: f32,
}

impl Theme {
    const fn new(
        name: &'static str,
        ambient_color: &'static str,
        directional_color: &'static str,
        ambient_intensity: f32,
        light_intensity: f32,
    ) -> Self {
        Self {
            name,
            preset: name,
            ambient_color,
            directional_color,
            ambient_intensity,
            light_intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    Unknown(String),
    #[error("Theme rotation must contain at least one theme")]
    EmptyRotation,
}

/// Every theme the scene knows about, in cycling order
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("night", "#0a1025", "#2c4073", 0.25, 0.5),
                Theme::new("starry", "#b9d5ff", "#ffffff", 0.5, 0.8),
                Theme::new("egypt", "#fff2cc", "#ffffe0", 0.5, 1.5),
                Theme::new("forest", "#c9e6ca", "#f5faf5", 0.5, 1.5),
                Theme::new("dream", "#e7d8f5", "#ffffff", 0.5, 1.5),
                Theme::new("volcano", "#ff8c7a", "#ffccaa", 0.5, 1.7),
            ],
        }
    }
}

impl ThemeCatalog {
    /// Build a catalog from an explicit list
    ///
    /// # Errors
    /// Returns `ThemeError::EmptyRotation` if `themes` is empty.
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        if themes.is_empty() {
            return Err(ThemeError::EmptyRotation);
        }
        Ok(Self { themes })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|t| t.name)
    }

    /// The first theme in the catalog
    #[must_use]
    pub fn first(&self) -> &Theme {
        &self.themes[0]
    }

    /// Pick the next theme
    ///
    /// A known `requested` name wins. Otherwise the theme after `current` is
    /// returned, wrapping at the end; an unknown `current` starts from the top.
    ///
    /// # Examples
    /// ```
    /// use vrdle::themes::ThemeCatalog;
    ///
    /// let catalog = ThemeCatalog::default();
    /// assert_eq!(catalog.switch("night", None).name, "starry");
    /// assert_eq!(catalog.switch("night", Some("forest")).name, "forest");
    /// assert_eq!(catalog.switch("volcano", None).name, "night");
    /// ```
    #[must_use]
    pub fn switch(&self, current: &str, requested: Option<&str>) -> &Theme {
        if let Some(theme) = requested.and_then(|name| self.get(name)) {
            return theme;
        }

        let next = self
            .themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(current))
            .map_or(0, |i| (i + 1) % self.themes.len());
        &self.themes[next]
    }
}

/// Fixed sequence of themes stepped through one click at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRotation {
    names: Vec<&'static str>,
    index: usize,
}

impl ThemeRotation {
    /// Rotation over `names`, each of which must exist in `catalog`
    ///
    /// # Errors
    /// - `ThemeError::EmptyRotation` for an empty list
    /// - `ThemeError::Unknown` for a name missing from the catalog
    pub fn new(catalog: &ThemeCatalog, names: &[&str]) -> Result<Self, ThemeError> {
        if names.is_empty() {
            return Err(ThemeError::EmptyRotation);
        }
        let names = names
            .iter()
            .map(|&name| {
                catalog
                    .get(name)
                    .map(|t| t.name)
                    .ok_or_else(|| ThemeError::Unknown(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { names, index: 0 })
    }

    /// Night and starry, the scene's default pair
    ///
    /// # Errors
    /// Only if `catalog` lacks those two themes.
    pub fn default_for(catalog: &ThemeCatalog) -> Result<Self, ThemeError> {
        Self::new(catalog, &["night", "starry"])
    }

    /// Return the theme to apply now and advance
    pub fn advance(&mut self) -> &'static str {
        let name = self.names[self.index];
        self.index = (self.index + 1) % self.names.len();
        name
    }

    /// What the next `advance` will return
    #[must_use]
    pub fn peek(&self) -> &'static str {
        self.names[self.index]
    }
}

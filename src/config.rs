//! Editor configuration
//!
//! [`EditorConfig`] is fixed when an [`InlineEditor`](crate::editor::InlineEditor)
//! is created. Its serializable part can be written as YAML ([`EditorOptions`])
//! and is merged over the built-in defaults: keys present in the file win,
//! absent keys keep the default, and an explicit `null` on a size leaf removes
//! the default constraint.
//!
//! ```yaml
//! allow_empty: false
//! sizes:
//!   width: element+10
//!   min:
//!     width: 50
//!   max:
//!     height: null
//! ```

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::adapter::ElementId;
use crate::editor::EditorView;
use crate::size::{Axis, AxisPair, SizeError, SizeSpec, SizeValue};

/// Custom acceptance check for a candidate value. `true` accepts.
pub type InputValidator = Rc<dyn Fn(&str, &dyn EditorView) -> bool>;

/// Called after a commit with `(new_value, old_value, editor)`
pub type CommitHook = Rc<dyn Fn(&str, &str, &dyn EditorView)>;

/// CSS class names handed to the adapter when it creates the editor nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorClasses {
    pub wrapper: String,
    pub editor: String,
}

impl Default for EditorClasses {
    fn default() -> Self {
        Self {
            wrapper: "ei-wrapper".to_string(),
            editor: "ei-editor".to_string(),
        }
    }
}

/// Configuration of one inline editor
#[derive(Clone)]
pub struct EditorConfig {
    pub classes: EditorClasses,
    /// Element that starts an edit. Defaults to the display element.
    pub trigger: Option<ElementId>,
    pub sizes: SizeSpec,
    /// Accept an empty value on completion
    pub allow_empty: bool,
    pub input_validator: Option<InputValidator>,
    pub on_commit: Option<CommitHook>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            classes: EditorClasses::default(),
            trigger: None,
            sizes: SizeSpec::default(),
            allow_empty: true,
            input_validator: None,
            on_commit: None,
        }
    }
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfig")
            .field("classes", &self.classes)
            .field("trigger", &self.trigger)
            .field("sizes", &self.sizes)
            .field("allow_empty", &self.allow_empty)
            .field("input_validator", &self.input_validator.as_ref().map(|_| "<fn>"))
            .field("on_commit", &self.on_commit.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl EditorConfig {
    /// Defaults overridden by `options`, with every size leaf checked
    pub fn from_options(options: EditorOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        options.apply_to(&mut config);
        config.sizes.validate()?;
        Ok(config)
    }

    /// Parse YAML options and merge them over the defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let options: EditorOptions =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_options(options)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Load config from disk, or return defaults if it is missing or invalid
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded editor config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn with_sizes(mut self, sizes: SizeSpec) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<ElementId>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn with_input_validator(
        mut self,
        validator: impl Fn(&str, &dyn EditorView) -> bool + 'static,
    ) -> Self {
        self.input_validator = Some(Rc::new(validator));
        self
    }

    pub fn with_on_commit(mut self, hook: impl Fn(&str, &str, &dyn EditorView) + 'static) -> Self {
        self.on_commit = Some(Rc::new(hook));
        self
    }

    /// The serializable part of this config, every field spelled out
    pub fn to_options(&self) -> EditorOptions {
        let leaf = |value: &Option<SizeValue>| Some(value.clone());
        let bounds = |pair: &AxisPair<Option<SizeValue>>| BoundOptions {
            width: leaf(&pair.width),
            height: leaf(&pair.height),
        };
        EditorOptions {
            classes: Some(ClassOptions {
                wrapper: Some(self.classes.wrapper.clone()),
                editor: Some(self.classes.editor.clone()),
            }),
            trigger: self.trigger.clone(),
            sizes: Some(SizeOptions {
                width: leaf(&self.sizes.width),
                height: leaf(&self.sizes.height),
                min: Some(bounds(&self.sizes.min)),
                max: Some(bounds(&self.sizes.max)),
            }),
            allow_empty: Some(self.allow_empty),
        }
    }
}

/// Serializable overrides for [`EditorConfig`]. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<ClassOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ElementId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<SizeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// Size overrides. Outer `None` keeps the default; `Some(None)` is an
/// explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeOptions {
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<Option<SizeValue>>,
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<Option<SizeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<BoundOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<BoundOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundOptions {
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<Option<SizeValue>>,
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<Option<SizeValue>>,
}

/// Present keys (including `null`) become `Some`; absent keys fall back to
/// the field default `None`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<SizeValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<SizeValue>::deserialize(deserializer).map(Some)
}

impl EditorOptions {
    /// Merge these overrides into `config`, recursing into nested records
    pub fn apply_to(self, config: &mut EditorConfig) {
        if let Some(classes) = self.classes {
            if let Some(wrapper) = classes.wrapper {
                config.classes.wrapper = wrapper;
            }
            if let Some(editor) = classes.editor {
                config.classes.editor = editor;
            }
        }
        if let Some(trigger) = self.trigger {
            config.trigger = Some(trigger);
        }
        if let Some(sizes) = self.sizes {
            sizes.apply_to(&mut config.sizes);
        }
        if let Some(allow_empty) = self.allow_empty {
            config.allow_empty = allow_empty;
        }
    }
}

impl SizeOptions {
    pub fn apply_to(self, spec: &mut SizeSpec) {
        if let Some(width) = self.width {
            *spec.target_mut(Axis::Width) = width;
        }
        if let Some(height) = self.height {
            *spec.target_mut(Axis::Height) = height;
        }
        if let Some(min) = self.min {
            min.apply_to(&mut spec.min);
        }
        if let Some(max) = self.max {
            max.apply_to(&mut spec.max);
        }
    }
}

impl BoundOptions {
    pub fn apply_to(self, bounds: &mut AxisPair<Option<SizeValue>>) {
        if let Some(width) = self.width {
            bounds.width = width;
        }
        if let Some(height) = self.height {
            bounds.height = height;
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Size(SizeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Size(e) => write!(f, "Invalid size: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Size(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SizeError> for ConfigError {
    fn from(e: SizeError) -> Self {
        ConfigError::Size(e)
    }
}

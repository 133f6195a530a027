//! Step syntax for the `catalog` and `story` subcommands
//!
//! Catalog: `home`, `up`, `cat:KEY`, `sub:KEY`, `leaf:KEY`, `open:KEY`.
//! Story: `goto:ID`, `back`.

use nav_engine::{
    GraphCommand, GraphNavigator, HierarchyCommand, HierarchyNavigator, NavigationError, Navigator,
    Outcome,
};
use nav_store::{IdError, Key, Level, NodeId};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Step syntax errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum StepError {
    #[error("unknown step `{0}`")]
    Unknown(String),

    #[error("step `{0}` needs a value, e.g. `{0}:NAME`")]
    MissingValue(String),

    #[error(transparent)]
    InvalidId(#[from] IdError),
}

/// One hierarchy step
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogStep {
    Home,
    Up,
    Select(Level, Key),
    Open(Key),
}

impl CatalogStep {
    pub(crate) fn run(&self, nav: &mut HierarchyNavigator) -> Result<Outcome, NavigationError> {
        match self {
            Self::Home => Ok(nav.home()),
            Self::Up => Ok(nav.ascend()),
            Self::Select(level, key) => {
                let command = HierarchyCommand::select_at(nav.cursor(), *level, key.clone())?;
                nav.apply(command)
            }
            Self::Open(key) => nav.descend(key.clone()),
        }
    }
}

impl FromStr for CatalogStep {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = split(s);
        let key = || -> Result<Key, StepError> {
            let value = value.ok_or_else(|| StepError::MissingValue(name.to_string()))?;
            Ok(Key::new(value)?)
        };
        match name {
            "home" => Ok(Self::Home),
            "up" => Ok(Self::Up),
            "cat" => Ok(Self::Select(Level::Category, key()?)),
            "sub" => Ok(Self::Select(Level::SubCategory, key()?)),
            "leaf" => Ok(Self::Select(Level::LeafGroup, key()?)),
            "open" => Ok(Self::Open(key()?)),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

impl Display for CatalogStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Up => f.write_str("up"),
            Self::Select(Level::Category, key) => write!(f, "cat:{key}"),
            Self::Select(Level::SubCategory, key) => write!(f, "sub:{key}"),
            Self::Select(Level::LeafGroup, key) => write!(f, "leaf:{key}"),
            Self::Open(key) => write!(f, "open:{key}"),
        }
    }
}

/// One graph step
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoryStep {
    GoTo(NodeId),
    Back,
}

impl StoryStep {
    pub(crate) fn run(&self, nav: &mut GraphNavigator) -> Result<Outcome, NavigationError> {
        let command = match self {
            Self::GoTo(id) => GraphCommand::GoTo(id.clone()),
            Self::Back => GraphCommand::GoBack,
        };
        nav.apply(command)
    }
}

impl FromStr for StoryStep {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split(s) {
            ("back", None) => Ok(Self::Back),
            ("goto", Some(id)) => Ok(Self::GoTo(NodeId::new(id)?)),
            ("goto", None) => Err(StepError::MissingValue("goto".to_string())),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

impl Display for StoryStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoTo(id) => write!(f, "goto:{id}"),
            Self::Back => f.write_str("back"),
        }
    }
}

fn split(s: &str) -> (&str, Option<&str>) {
    match s.split_once(':') {
        Some((name, value)) => (name, Some(value)),
        None => (s, None),
    }
}

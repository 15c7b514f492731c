use crate::marks::group::SceneGroup;
use crate::marks::line::SceneLineMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::symbol::SceneSymbolMark;
use crate::marks::text::SceneTextMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneMark {
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(SceneTextMark),
    Line(SceneLineMark),
    Symbol(SceneSymbolMark),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn name(&self) -> &str {
        match self {
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
            Self::Line(mark) => &mark.name,
            Self::Symbol(mark) => &mark.name,
            Self::Group(mark) => &mark.name,
        }
    }

    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Rect(mark) => mark.zindex,
            Self::Rule(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
            Self::Line(mark) => mark.zindex,
            Self::Symbol(mark) => mark.zindex,
            Self::Group(mark) => mark.zindex,
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        if let Self::Group(group) = self {
            group.marks.as_slice()
        } else {
            &[]
        }
    }
}

/// Timed reveal hook for targets that support animation. Instance `i`
/// starts at `begin_ms + i * stagger_ms` and takes `duration_ms`.
/// Targets without timed reveal render the final state immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reveal {
    pub begin_ms: u32,
    pub stagger_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    /// Start of instance `index`, saturating at `u32::MAX`
    pub fn begin_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.begin_ms.saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn end_for(&self, index: usize) -> u32 {
        self.begin_for(index).saturating_add(self.duration_ms)
    }
}

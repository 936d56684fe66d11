use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The eight named fields of a [`Rating`], in output order.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum SkillCategory {
    Overall,
    Stream,
    Jumpstream,
    Handstream,
    Stamina,
    Jack,
    Chordjack,
    Technical,
}

/// Difficulty of a chart per skill category at one rate and accuracy goal.
///
/// The all-zero value (`Rating::default()`) marks a trivial or invalid chart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub overall: f32,
    pub stream: f32,
    pub jumpstream: f32,
    pub handstream: f32,
    pub stamina: f32,
    pub jack: f32,
    pub chordjack: f32,
    pub technical: f32,
}

impl Rating {
    pub fn get(&self, category: SkillCategory) -> f32 {
        match category {
            SkillCategory::Overall => self.overall,
            SkillCategory::Stream => self.stream,
            SkillCategory::Jumpstream => self.jumpstream,
            SkillCategory::Handstream => self.handstream,
            SkillCategory::Stamina => self.stamina,
            SkillCategory::Jack => self.jack,
            SkillCategory::Chordjack => self.chordjack,
            SkillCategory::Technical => self.technical,
        }
    }

    /// All eight values, overall first.
    pub fn to_vec(&self) -> Vec<f32> {
        SkillCategory::iter().map(|c| self.get(c)).collect()
    }

    /// Largest of the seven skill categories (overall excluded).
    pub fn highest_skillset(&self) -> f32 {
        SkillCategory::iter()
            .filter(|&c| c != SkillCategory::Overall)
            .map(|c| self.get(c))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn is_zero(&self) -> bool {
        *self == Rating::default()
    }
}

/// Selects the difficulty series and pattern downscalers a skill solve uses.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ChiselType {
    Stream,
    Jumpstream,
    Handstream,
    Technical,
    Jack,
}

impl ChiselType {
    /// Technical reads the ms-based series, everything else the nps series.
    #[inline(always)]
    pub fn uses_nps(&self) -> bool {
        !matches!(self, ChiselType::Technical)
    }
}

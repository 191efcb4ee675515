use folio_protocol::TreeGuide;

use super::CommandLine;
use crate::model::{LineKind, Reveal, RevealItem, Skill, SkillLevel, SkillsContent};

/// Position of a tree node among its siblings and those of its ancestors.
///
/// Computed once while generating; painting only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branch {
    /// For each enclosing level, outermost first: was that ancestor the
    /// last of its siblings?
    pub ancestors_last: Vec<bool>,
    pub last: bool,
}

impl Branch {
    /// Indent guides for this node, one per level plus its own connector.
    pub fn guides(&self) -> Vec<TreeGuide> {
        let mut guides: Vec<TreeGuide> = self
            .ancestors_last
            .iter()
            .map(|&last| if last { TreeGuide::Blank } else { TreeGuide::Vertical })
            .collect();
        guides.push(if self.last { TreeGuide::Last } else { TreeGuide::Branch });
        guides
    }

    fn child(&self, last: bool) -> Self {
        let mut ancestors_last = self.ancestors_last.clone();
        ancestors_last.push(self.last);
        Self { ancestors_last, last }
    }
}

/// A skill without its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLeaf {
    pub name: String,
    pub level: SkillLevel,
    pub experience: Option<String>,
    pub is_strength: bool,
}

impl From<&Skill> for SkillLeaf {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
            experience: skill.experience.clone(),
            is_strength: skill.is_strength,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsLine {
    Command(CommandLine),
    Category { name: String, branch: Branch },
    /// `depth` 1 is a skill directly under a category.
    Skill {
        skill: SkillLeaf,
        depth: usize,
        branch: Branch,
    },
}

impl SkillsLine {
    pub fn branch(&self) -> Option<&Branch> {
        match self {
            Self::Command(_) => None,
            Self::Category { branch, .. } | Self::Skill { branch, .. } => Some(branch),
        }
    }
}

impl RevealItem for SkillsLine {
    fn kind(&self) -> LineKind {
        match self {
            Self::Command(_) => LineKind::Command,
            Self::Category { .. } => LineKind::Category,
            Self::Skill { depth: 1, .. } => LineKind::SkillItem,
            Self::Skill { depth: 2, .. } => LineKind::ChildSkillItem,
            Self::Skill { .. } => LineKind::GrandchildSkillItem,
        }
    }

    fn reveal(&self) -> Reveal<'_> {
        match self {
            Self::Command(cmd) => Reveal::Typed(cmd.full_text()),
            _ => Reveal::Instant,
        }
    }
}

/// `tree` command, then each category followed by its skills depth-first.
pub fn generate(skills: &SkillsContent) -> Vec<SkillsLine> {
    let mut lines = vec![SkillsLine::Command(CommandLine::new(skills.command.clone()))];
    let count = skills.categories.len();
    for (i, category) in skills.categories.iter().enumerate() {
        let branch = Branch {
            ancestors_last: Vec::new(),
            last: i + 1 == count,
        };
        lines.push(SkillsLine::Category {
            name: category.name.clone(),
            branch: branch.clone(),
        });
        push_skills(&mut lines, &category.skills, &branch, 1);
    }
    lines
}

fn push_skills(lines: &mut Vec<SkillsLine>, skills: &[Skill], parent: &Branch, depth: usize) {
    for (i, skill) in skills.iter().enumerate() {
        let branch = parent.child(i + 1 == skills.len());
        lines.push(SkillsLine::Skill {
            skill: SkillLeaf::from(skill),
            depth,
            branch: branch.clone(),
        });
        push_skills(lines, &skill.children, &branch, depth + 1);
    }
}

//! Per-entity skill instances with independent cooldowns.

use std::sync::Arc;

use crate::catalog::SkillTemplate;
use crate::error::ConfigError;

/// One entity's live copy of a skill.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillInstance {
    pub template: Arc<SkillTemplate>,
    pub current_cooldown: u32,
    /// Set on the turn the skill is used so that turn's tick leaves the
    /// fresh cooldown untouched.
    pub hanging: bool,
}

impl SkillInstance {
    pub fn new(template: Arc<SkillTemplate>) -> Self {
        Self {
            template,
            current_cooldown: 0,
            hanging: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.template.id
    }

    /// A skill can be used only when fully cooled down.
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Starts the cooldown after a use.
    pub fn mark_used(&mut self) {
        self.hanging = true;
        self.current_cooldown = self.template.base_cooldown;
    }

    /// Advances the cooldown by one turn.
    pub fn tick(&mut self) {
        if self.hanging {
            self.hanging = false;
        } else if self.current_cooldown > 0 {
            self.current_cooldown -= 1;
        }
    }
}

/// Skills known by one entity, unique by id, in loadout order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillSet {
    skills: Vec<SkillInstance>,
}

impl SkillSet {
    /// Builds a fresh skill set with every cooldown at zero.
    pub fn from_templates(
        templates: impl IntoIterator<Item = Arc<SkillTemplate>>,
    ) -> Result<Self, ConfigError> {
        let mut skills: Vec<SkillInstance> = Vec::new();
        for template in templates {
            if skills.iter().any(|s| s.id() == template.id) {
                return Err(ConfigError::DuplicateSkill(template.id.clone()));
            }
            skills.push(SkillInstance::new(template));
        }
        Ok(Self { skills })
    }

    pub fn get(&self, id: &str) -> Option<&SkillInstance> {
        self.skills.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SkillInstance> {
        self.skills.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids of every skill currently off cooldown, in loadout order.
    pub fn ready_ids(&self) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| s.is_ready())
            .map(|s| s.id().to_string())
            .collect()
    }

    /// Advances every cooldown by one turn.
    pub fn tick(&mut self) {
        self.skills.iter_mut().for_each(SkillInstance::tick);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillInstance> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

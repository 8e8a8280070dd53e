//! Default battle content: the four guardian allies and the dungeon's
//! five-monster roster.

use crate::combat::types::{Ally, Monster, Party};
use crate::core::element::Element;
use crate::skills::{Debuff, Skill, SkillDamage};

/// Standard skill cost shared by the guardian skills.
pub const GUARDIAN_SKILL_COST: u32 = 10;

/// The four-guardian party: one ally per attacking element, 600 shared hp.
pub fn default_party() -> Party {
    let seiryu_skill = Skill {
        name: "Azure Dragon's Gale".to_string(),
        need_sp: GUARDIAN_SKILL_COST,
        damage: Some(SkillDamage::Range { min: 20, max: 50 }),
        heal: None,
        debuff: None,
        stun_turns: Some(3),
    };
    let suzaku_skill = Skill {
        name: "Vermilion Bird's Flame".to_string(),
        need_sp: GUARDIAN_SKILL_COST,
        damage: Some(SkillDamage::Fixed {
            base: 30,
            fraction: 0.1,
        }),
        heal: None,
        debuff: None,
        stun_turns: None,
    };
    let byakko_skill = Skill {
        name: "White Tiger's Blessing".to_string(),
        need_sp: GUARDIAN_SKILL_COST,
        damage: None,
        heal: Some(50),
        debuff: None,
        stun_turns: None,
    };
    let genbu_skill = Skill {
        name: "Black Tortoise's Deluge".to_string(),
        need_sp: GUARDIAN_SKILL_COST,
        damage: Some(SkillDamage::Range { min: 20, max: 50 }),
        heal: None,
        debuff: Some(Debuff {
            ratio: 0.5,
            turns: 3,
        }),
        stun_turns: None,
    };

    Party::new(
        600,
        vec![
            Ally::new("Seiryu", Element::Wind, 150, 15, 10, Some(seiryu_skill)),
            Ally::new("Suzaku", Element::Fire, 150, 25, 10, Some(suzaku_skill)),
            Ally::new("Byakko", Element::Earth, 150, 20, 5, Some(byakko_skill)),
            Ally::new("Genbu", Element::Water, 150, 20, 15, Some(genbu_skill)),
        ],
    )
}

/// The monster roster, fought in order; defeating the Dragon clears the run.
pub fn default_roster() -> Vec<Monster> {
    vec![
        Monster::new("Slime", Element::Water, 100, 10, 1),
        Monster::new("Goblin", Element::Earth, 200, 20, 5),
        Monster::new("Giant Bat", Element::Wind, 300, 30, 10),
        Monster::new("Werewolf", Element::Wind, 400, 40, 15),
        Monster::new("Dragon", Element::Fire, 600, 50, 20),
    ]
}

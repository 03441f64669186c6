//! Hero records from the statistics API and the monkey toy model

use serde::{Deserialize, Serialize};

/// A hero as returned by the `heroStats` endpoint
///
/// Only the fields the page shows are kept; the API sends many more and they
/// are ignored on decode. Pro counts are missing for some heroes, so they stay
/// optional here and default to zero only at display time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    /// Internal name, e.g. `npc_dota_hero_antimage`
    pub name: String,
    /// Display name, e.g. `Anti-Mage`
    pub localized_name: String,
    /// Icon path relative to the API endpoint
    pub icon: String,
    #[serde(default)]
    pub pro_pick: Option<u32>,
    #[serde(default)]
    pub pro_ban: Option<u32>,
    #[serde(default)]
    pub pro_win: Option<u32>,
}

impl Hero {
    pub fn picks(&self) -> u32 {
        self.pro_pick.unwrap_or(0)
    }

    pub fn bans(&self) -> u32 {
        self.pro_ban.unwrap_or(0)
    }

    pub fn wins(&self) -> u32 {
        self.pro_win.unwrap_or(0)
    }

    /// Link path of the hero detail page
    pub fn route(&self) -> String {
        format!("/heroes/{}", self.name)
    }

    /// Absolute icon URL; `base` is the API endpoint without a trailing slash
    pub fn icon_url(&self, base: &str) -> String {
        format!("{}{}", base, self.icon)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banana {
    pub is_rotten: bool,
}

impl Banana {
    pub fn label(&self) -> &'static str {
        if self.is_rotten {
            "rotten"
        } else {
            "fresh"
        }
    }
}

/// Local toy state, never fetched or persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monkey {
    pub name: String,
    pub happy: bool,
    pub banana: Banana,
}

impl Monkey {
    pub fn mood(&self) -> &'static str {
        if self.happy {
            "happy"
        } else {
            "sad"
        }
    }
}

impl Default for Monkey {
    fn default() -> Self {
        Self {
            name: "John".into(),
            happy: true,
            banana: Banana { is_rotten: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": 1,
            "name": "npc_dota_hero_antimage",
            "localized_name": "Anti-Mage",
            "primary_attr": "agi",
            "icon": "/apps/dota2/images/dota_react/heroes/icons/antimage.png?",
            "pro_pick": 5,
            "pro_ban": 2,
            "pro_win": 3
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, 1);
        assert_eq!(hero.localized_name, "Anti-Mage");
        assert_eq!((hero.picks(), hero.bans(), hero.wins()), (5, 2, 3));
    }

    #[test]
    fn test_missing_and_null_counts_default_to_zero() {
        let json = r#"{
            "id": 2,
            "name": "npc_dota_hero_axe",
            "localized_name": "Axe",
            "icon": "/axe.png",
            "pro_pick": null
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.pro_pick, None);
        assert_eq!(hero.pro_win, None);
        assert_eq!((hero.picks(), hero.bans(), hero.wins()), (0, 0, 0));
    }

    #[test]
    fn test_route_and_icon_url() {
        let hero = Hero {
            id: 1,
            name: "antimage".into(),
            localized_name: "Anti-Mage".into(),
            icon: "/x.png".into(),
            pro_pick: None,
            pro_ban: None,
            pro_win: None,
        };

        assert_eq!(hero.route(), "/heroes/antimage");
        assert_eq!(
            hero.icon_url("https://api.opendota.com"),
            "https://api.opendota.com/x.png"
        );
    }

    #[test]
    fn test_monkey_labels() {
        let mut monkey = Monkey::default();
        assert_eq!(monkey.name, "John");
        assert_eq!(monkey.mood(), "happy");
        assert_eq!(monkey.banana.label(), "fresh");

        monkey.happy = false;
        monkey.banana.is_rotten = true;
        assert_eq!(monkey.mood(), "sad");
        assert_eq!(monkey.banana.label(), "rotten");
    }
}

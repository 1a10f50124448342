//! Built-in content pools and the loadable table set.
//!
//! Every pool is a list of `|`-delimited entries (see [`crate::entry`]).
//! Custom tables can be supplied as JSON; pools missing from the file keep
//! their built-in contents.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::field;
use crate::error::{ContentError, ContentResult};

/// Races with the stats they favour.
pub const RACES: &[&str] = &[
    "Half Orc|HP Max",
    "Half Man|CHA",
    "Half Halfling|DEX",
    "Double Hobbit|STR",
    "Hob-Hobbit|DEX,CON",
    "Low Elf|CON",
    "Dung Elf|WIS",
    "Talking Pony|MP Max,INT",
    "Gyrognome|DEX",
    "Lesser Dwarf|CON",
    "Crested Dwarf|CHA",
    "Eel Man|DEX",
    "Panda Man|CON,STR",
    "Trans-Kobold|WIS",
    "Enchanted Motorcycle|MP Max",
    "Will o' the Wisp|WIS",
    "Battle-Finch|DEX,INT",
    "Double Wookiee|STR",
    "Skraeling|WIS",
    "Demicanadian|CON",
    "Land Squid|STR,HP Max",
];

/// Classes with the stats they favour.
pub const CLASSES: &[&str] = &[
    "Ur-Paladin|WIS,CON",
    "Voodoo Princess|INT,CHA",
    "Robot Monk|STR",
    "Mu-Fu Monk|DEX",
    "Mage Illusioner|INT,MP Max",
    "Shiv-Knight|DEX",
    "Inner Mason|CON",
    "Fighter/Organist|CHA,STR",
    "Puma Burgular|DEX",
    "Runeloremaster|WIS",
    "Hunter Strangler|DEX,INT",
    "Battle-Felon|STR",
    "Tickle-Mimic|WIS,INT",
    "Slow Poisoner|CON",
    "Bastard Lunatic|CON",
    "Jungle Clown|DEX,CHA",
    "Birdrider|WIS",
    "Vermineer|INT",
];

/// Monsters: name, natural level, loot part (`*` for a special item).
pub const MONSTERS: &[&str] = &[
    "Anhkheg|6|chitin",
    "Ant|0|antenna",
    "Ape|4|ass",
    "Baluchitherium|14|ear",
    "Beholder|10|eyestalk",
    "Black Pudding|10|saliva",
    "Blink Dog|4|eyebrow",
    "Cub Scout|1|neckerchief",
    "Girl Scout|2|cookie",
    "Boy Scout|3|merit badge",
    "Eagle Scout|4|merit badge",
    "Bugbear|3|skin",
    "Bugboar|3|tusk",
    "Boogie|3|slime",
    "Camel|2|hump",
    "Carrion Crawler|3|egg",
    "Catoblepas|6|neck",
    "Centaur|4|rib",
    "Centipede|1|leg",
    "Cockatrice|5|wattle",
    "Couatl|9|wing",
    "Crayfish|0|antenna",
    "Demogorgon|53|tentacle",
    "Jubilex|17|gel",
    "Manes|1|tooth",
    "Orcus|27|wand",
    "Vrock|8|neck",
    "Hezrou|9|leg",
    "Glabrezu|10|collar",
    "Nalfeshnee|11|tusk",
    "Marilith|7|arm",
    "Balor|8|whip",
    "Yeenoghu|25|flail",
    "Asmodeus|52|leathers",
    "Baalzebul|43|pants",
    "Barbed Devil|8|flame",
    "Bone Devil|9|hook",
    "Dispater|30|matches",
    "Geryon|30|cornucopia",
    "Malebranche|5|fork",
    "Ice Devil|11|snow",
    "Lemure|3|blob",
    "Pit Fiend|13|seed",
    "Ankylosaurus|9|tail",
    "Brontosaurus|30|brain",
    "Diplodocus|24|fin",
    "Elasmosaurus|15|neck",
    "Gorgosaurus|13|arm",
    "Iguanadon|6|thumb",
    "Megalosaurus|12|jaw",
    "Monoclonius|8|horn",
    "Pentasaurus|12|head",
    "Stegosaurus|18|plate",
    "Triceratops|16|horn",
    "Tyranosaurus Rex|18|forearm",
    "Djinn|7|lamp",
    "Doppelganger|4|face",
    "Black Dragon|7|*",
    "Plaid Dragon|7|sporrin",
    "Blue Dragon|9|*",
    "Beige Dragon|9|*",
    "Brass Dragon|7|pole",
    "Dragon Turtle|13|shell",
    "Dryad|2|acorn",
    "Dwarf|1|drawers",
    "Efreet|10|cinder",
    "Ettin|10|fur",
    "Gargoyle|4|gravel",
    "Gelatinous Cube|4|jam",
    "Ghast|4|vomit",
    "Ghoul|2|muscle",
    "Gnoll|2|collar",
    "Gnome|1|hat",
    "Goblin|1|ear",
    "Gorgon|8|testicle",
    "Grey Ooze|3|gravy",
    "Griffon|7|nest",
    "Halfling|1|underwear",
    "Harpy|3|mascara",
    "Hell Hound|7|tongue",
    "Hill Giant|8|corpse",
    "Hippogriff|3|egg",
    "Hobgoblin|1|patella",
    "Homunculus|2|sack",
    "Hydra|8|gyrum",
    "Kobold|0|ear",
    "Lamia|6|gown",
    "Lich|11|crown",
    "Lizard Man|2|tail",
    "Manticore|6|spike",
    "Medusa|6|eye",
    "Minotaur|6|map",
    "Mummy|6|gauze",
    "Naga|6|rattle",
    "Nixie|1|webbing",
    "Ogre|4|talon",
    "Ogre Mage|5|apparel",
    "Orc|1|snout",
    "Owlbear|5|feather",
    "Pegasus|4|aileron",
    "Purple Worm|15|dung",
    "Rakshasa|7|pajamas",
    "Rat|0|tail",
    "Roc|18|wing",
    "Rust Monster|5|shavings",
    "Salamander|7|tail",
    "Shambling Mound|9|mulch",
    "Skeleton|1|clavicle",
    "Spectre|7|vestige",
    "Sphinx|10|paw",
    "Stirge|1|proboscis",
    "Stone Giant|9|hatchback",
    "Titan|20|sandal",
    "Troll|6|hide",
    "Umber Hulk|8|claw",
    "Unicorn|4|blinder",
    "Vampire|8|pancreas",
    "Wight|4|lung",
    "Will-o'-the-Wisp|9|wisp",
    "Wraith|5|finger",
    "Wyvern|7|wing",
    "Yeti|4|fur",
    "Zombie|2|forehead",
    "Wirehead|1|wire",
    "Slimer|4|slime",
    "Twig Golem|1|twig",
    "Pig Latin Golem|3|tongue",
];

/// Weapons with their quality.
pub const WEAPONS: &[&str] = &[
    "Stick|0",
    "Broken Bottle|1",
    "Shiv|1",
    "Sprig|1",
    "Oxgoad|1",
    "Eelspear|2",
    "Bowie Knife|2",
    "Claw Hammer|2",
    "Handpeak|2",
    "Andiron|3",
    "Hatchet|3",
    "Tomahawk|3",
    "Hackbarm|3",
    "Crowbar|4",
    "Mace|4",
    "Battleadze|4",
    "Leafmace|5",
    "Shortsword|5",
    "Longiron|5",
    "Chain Whip|5",
    "Falchion|6",
    "Bastard Sword|6",
    "Spiked Flail|7",
    "Gaff|7",
    "Morningstar|8",
    "Glaive|8",
    "Bardiche|9",
    "Voulge|9",
    "Halberd|10",
    "Partisan|10",
    "Greatsword|11",
    "Zweihander|12",
    "Lucerne Hammer|12",
    "Bec de Corbin|13",
    "Footmans Flail|14",
    "Pike|15",
];

/// Shields with their quality.
pub const SHIELDS: &[&str] = &[
    "Parasol|0",
    "Pie Plate|1",
    "Garbage Can Lid|2",
    "Buckler|3",
    "Plexiglass|4",
    "Fender|4",
    "Round Shield|5",
    "Carapace|5",
    "Butterfly Shield|6",
    "Heater Shield|7",
    "Kite Shield|8",
    "Pavise|9",
    "Tower Shield|10",
    "Baroque Shield|11",
    "Aegis|12",
    "Magnetic Field|18",
];

/// Armor materials with their quality.
pub const ARMORS: &[&str] = &[
    "Lace|1",
    "Macrame|2",
    "Burlap|3",
    "Canvas|4",
    "Flannel|5",
    "Chamois|6",
    "Pleathers|7",
    "Leathers|8",
    "Bearskin|9",
    "Ringmail|10",
    "Scale Mail|12",
    "Chainmail|14",
    "Splint Mail|15",
    "Platemail|16",
    "ABS|17",
    "Kevlar|18",
    "Titanium|19",
    "Mithril Mail|20",
    "Diamond Mail|25",
    "Plasma|30",
];

/// Favourable weapon modifiers.
pub const OFFENSE_ATTRIB: &[&str] = &[
    "Polished|+1",
    "Serrated|+1",
    "Heavy|+1",
    "Pronged|+2",
    "Steely|+2",
    "Vicious|+3",
    "Venomed|+4",
    "Stabbity|+4",
    "Dancing|+5",
    "Invisible|+6",
    "Vorpal|+7",
];

/// Favourable armor and shield modifiers.
pub const DEFENSE_ATTRIB: &[&str] = &[
    "Studded|+1",
    "Banded|+2",
    "Gilded|+2",
    "Festooned|+3",
    "Holy|+4",
    "Cambric|+1",
    "Fine|+4",
    "Impressive|+5",
    "Custom|+3",
];

/// Unfavourable weapon modifiers.
pub const OFFENSE_BAD: &[&str] = &[
    "Dull|-2",
    "Tarnished|-1",
    "Rusty|-3",
    "Padded|-5",
    "Bent|-4",
    "Mini|-4",
    "Rubber|-6",
    "Nerf|-7",
    "Unbalanced|-2",
];

/// Unfavourable armor and shield modifiers.
pub const DEFENSE_BAD: &[&str] = &[
    "Holey|-1",
    "Patched|-1",
    "Threadbare|-2",
    "Faded|-1",
    "Rusty|-3",
    "Motheaten|-3",
    "Mildewed|-2",
    "Torn|-3",
    "Dented|-3",
    "Cursed|-5",
    "Plastic|-4",
    "Cracked|-4",
    "Warped|-3",
    "Corroded|-3",
];

/// Spells, roughly ordered from humble to grand. Wisdom plus level decides
/// how far down the list a character can learn.
pub const SPELLS: &[&str] = &[
    "Slime Finger",
    "Rabbit Punch",
    "Hastiness",
    "Good Move",
    "Sadness",
    "Seasick",
    "Shoelaces",
    "Inoculate",
    "Cone of Annoyance",
    "Magnetic Orb",
    "Invisible Hands",
    "Revolting Cloud",
    "Aqueous Humor",
    "Spectral Miasma",
    "Clever Fellow",
    "Lockjaw",
    "History Lesson",
    "Hydrophobia",
    "Big Sister",
    "Cone of Paste",
    "Mulligan",
    "Nestor's Bright Idea",
    "Holy Batpole",
    "Tumor (Benign)",
    "Braingate",
    "Nonplus",
    "Animate Nightstand",
    "Eye of the Troglodyte",
    "Curse Name",
    "Dropsy",
    "Vitreous Humor",
    "Roger's Grand Illusion",
    "Covet",
    "Black Idaho",
    "Astral Miasma",
    "Spectral Oyster",
    "Acrid Hands",
    "Angioplasty",
    "Grognor's Big Day Off",
    "Tumor (Malignant)",
    "Animate Tunic",
    "Ursine Armor",
    "Holy Roller",
    "Tonsillectomy",
    "Curse Family",
    "Infinite Confusion",
];

/// Mundane items for deliveries and fetch quests.
pub const BORING_ITEMS: &[&str] = &[
    "nail",
    "lunchpail",
    "sock",
    "I.O.U.",
    "cookie",
    "pint",
    "toothpick",
    "writ",
    "newspaper",
    "letter",
    "plank",
    "hat",
    "egg",
    "coin",
    "needle",
    "bucket",
    "ladder",
    "chicken",
    "twig",
    "dirtclod",
    "counterpane",
    "vest",
    "teratoma",
    "bunny",
    "rock",
    "pole",
    "carrot",
    "canoe",
    "inkwell",
    "hoe",
    "bandage",
    "trowel",
    "towel",
    "planter box",
    "anvil",
    "axle",
    "tuppence",
    "casket",
    "nosegay",
    "trinket",
    "credenza",
];

/// Nouns for interesting items.
pub const SPECIALS: &[&str] = &[
    "Diadem",
    "Festoon",
    "Gemstone",
    "Phial",
    "Tiara",
    "Scabbard",
    "Arrow",
    "Lens",
    "Lamp",
    "Hymnal",
    "Fleece",
    "Laurel",
    "Brooch",
    "Gimlet",
    "Cobble",
    "Albatross",
    "Brazier",
    "Bandolier",
    "Tome",
    "Garnet",
    "Amethyst",
    "Candelabra",
    "Corset",
    "Sphere",
    "Sceptre",
    "Ankh",
    "Talisman",
    "Orb",
    "Gammel",
    "Ornament",
    "Brocade",
    "Galoon",
    "Bijou",
    "Spangle",
    "Gimcrack",
    "Hood",
    "Vulpeculum",
];

/// Adjectives for interesting items.
pub const ITEM_ATTRIB: &[&str] = &[
    "Golden",
    "Gilded",
    "Spectral",
    "Astral",
    "Garlanded",
    "Precious",
    "Crafted",
    "Dual",
    "Filigreed",
    "Cruciate",
    "Arcane",
    "Blessed",
    "Reverential",
    "Lucky",
    "Enchanted",
    "Gleaming",
    "Grandiose",
    "Sacred",
    "Legendary",
    "Mythic",
    "Crystalline",
    "Austere",
    "Ostentatious",
    "One True",
    "Proverbial",
    "Fearsome",
    "Deadly",
    "Benevolent",
    "Unearthly",
    "Magnificent",
    "Iron",
    "Ormolu",
    "Puissant",
];

/// Benefits for special items ("... of <benefit>").
pub const ITEM_OFS: &[&str] = &[
    "Foreboding",
    "Foreshadowing",
    "Nervousness",
    "Happiness",
    "Torpor",
    "Danger",
    "Craft",
    "Silence",
    "Invisibility",
    "Rapidity",
    "Pleasure",
    "Practicality",
    "Hurting",
    "Joy",
    "Petulance",
    "Intrusion",
    "Chaos",
    "Suffering",
    "Extroversion",
    "Frenzy",
    "Sisterhood",
    "Solitude",
    "Punctuality",
    "Harmony",
    "Love",
    "Tranquility",
    "Wholesomeness",
    "Anger",
    "Glee",
    "Transcendence",
    "Chill",
];

/// Honorifics for named humanoid encounters.
pub const TITLES: &[&str] = &[
    "Mr.", "Mrs.", "Sir", "Sgt.", "Ms.", "Captain", "Chief", "Admiral", "Saint",
];

/// Grand titles for patrons and nemeses.
pub const IMPRESSIVE_TITLES: &[&str] = &[
    "King",
    "Queen",
    "Lord",
    "Lady",
    "Viceroy",
    "Mayor",
    "Prince",
    "Princess",
    "Chief",
    "Boss",
    "Archbishop",
];

/// Identifies one pool in a [`ContentTables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Playable races.
    Races,
    /// Playable classes.
    Classes,
    /// Monsters with level and loot.
    Monsters,
    /// Weapons with quality.
    Weapons,
    /// Shields with quality.
    Shields,
    /// Armor materials with quality.
    Armors,
    /// Favourable weapon modifiers.
    OffenseAttrib,
    /// Favourable armor modifiers.
    DefenseAttrib,
    /// Unfavourable weapon modifiers.
    OffenseBad,
    /// Unfavourable armor modifiers.
    DefenseBad,
    /// Spells, humble first.
    Spells,
    /// Mundane items.
    BoringItems,
    /// Interesting item nouns.
    Specials,
    /// Interesting item adjectives.
    ItemAttrib,
    /// Special item benefits.
    ItemOfs,
    /// Honorifics.
    Titles,
    /// Grand titles.
    ImpressiveTitles,
}

impl Pool {
    /// Every pool.
    pub const ALL: [Pool; 17] = [
        Pool::Races,
        Pool::Classes,
        Pool::Monsters,
        Pool::Weapons,
        Pool::Shields,
        Pool::Armors,
        Pool::OffenseAttrib,
        Pool::DefenseAttrib,
        Pool::OffenseBad,
        Pool::DefenseBad,
        Pool::Spells,
        Pool::BoringItems,
        Pool::Specials,
        Pool::ItemAttrib,
        Pool::ItemOfs,
        Pool::Titles,
        Pool::ImpressiveTitles,
    ];

    /// Pools whose second field must be an integer level or quality.
    fn is_leveled(self) -> bool {
        matches!(
            self,
            Self::Monsters
                | Self::Weapons
                | Self::Shields
                | Self::Armors
                | Self::OffenseAttrib
                | Self::DefenseAttrib
                | Self::OffenseBad
                | Self::DefenseBad
        )
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Races => "races",
            Self::Classes => "classes",
            Self::Monsters => "monsters",
            Self::Weapons => "weapons",
            Self::Shields => "shields",
            Self::Armors => "armors",
            Self::OffenseAttrib => "offense_attrib",
            Self::DefenseAttrib => "defense_attrib",
            Self::OffenseBad => "offense_bad",
            Self::DefenseBad => "defense_bad",
            Self::Spells => "spells",
            Self::BoringItems => "boring_items",
            Self::Specials => "specials",
            Self::ItemAttrib => "item_attrib",
            Self::ItemOfs => "item_ofs",
            Self::Titles => "titles",
            Self::ImpressiveTitles => "impressive_titles",
        };
        f.write_str(name)
    }
}

/// The complete set of pools the generators draw from.
///
/// Defaults to the built-in lists. A JSON file may override any subset:
///
/// ```text
/// {
///     "monsters": ["Dust Bunny|0|fluff", "Sock Puppet|2|button"],
///     "titles": ["Dame", "Baron"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTables {
    /// Playable races.
    pub races: Vec<String>,
    /// Playable classes.
    pub classes: Vec<String>,
    /// Monsters with level and loot.
    pub monsters: Vec<String>,
    /// Weapons with quality.
    pub weapons: Vec<String>,
    /// Shields with quality.
    pub shields: Vec<String>,
    /// Armor materials with quality.
    pub armors: Vec<String>,
    /// Favourable weapon modifiers.
    pub offense_attrib: Vec<String>,
    /// Favourable armor modifiers.
    pub defense_attrib: Vec<String>,
    /// Unfavourable weapon modifiers.
    pub offense_bad: Vec<String>,
    /// Unfavourable armor modifiers.
    pub defense_bad: Vec<String>,
    /// Spells, humble first.
    pub spells: Vec<String>,
    /// Mundane items.
    pub boring_items: Vec<String>,
    /// Interesting item nouns.
    pub specials: Vec<String>,
    /// Interesting item adjectives.
    pub item_attrib: Vec<String>,
    /// Special item benefits.
    pub item_ofs: Vec<String>,
    /// Honorifics.
    pub titles: Vec<String>,
    /// Grand titles.
    pub impressive_titles: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            races: owned(RACES),
            classes: owned(CLASSES),
            monsters: owned(MONSTERS),
            weapons: owned(WEAPONS),
            shields: owned(SHIELDS),
            armors: owned(ARMORS),
            offense_attrib: owned(OFFENSE_ATTRIB),
            defense_attrib: owned(DEFENSE_ATTRIB),
            offense_bad: owned(OFFENSE_BAD),
            defense_bad: owned(DEFENSE_BAD),
            spells: owned(SPELLS),
            boring_items: owned(BORING_ITEMS),
            specials: owned(SPECIALS),
            item_attrib: owned(ITEM_ATTRIB),
            item_ofs: owned(ITEM_OFS),
            titles: owned(TITLES),
            impressive_titles: owned(IMPRESSIVE_TITLES),
        }
    }
}

impl ContentTables {
    /// Entries of a pool.
    pub fn pool(&self, pool: Pool) -> &[String] {
        match pool {
            Pool::Races => &self.races,
            Pool::Classes => &self.classes,
            Pool::Monsters => &self.monsters,
            Pool::Weapons => &self.weapons,
            Pool::Shields => &self.shields,
            Pool::Armors => &self.armors,
            Pool::OffenseAttrib => &self.offense_attrib,
            Pool::DefenseAttrib => &self.defense_attrib,
            Pool::OffenseBad => &self.offense_bad,
            Pool::DefenseBad => &self.defense_bad,
            Pool::Spells => &self.spells,
            Pool::BoringItems => &self.boring_items,
            Pool::Specials => &self.specials,
            Pool::ItemAttrib => &self.item_attrib,
            Pool::ItemOfs => &self.item_ofs,
            Pool::Titles => &self.titles,
            Pool::ImpressiveTitles => &self.impressive_titles,
        }
    }

    /// Display names (first field) of a pool.
    pub fn names(&self, pool: Pool) -> Vec<&str> {
        self.pool(pool).iter().map(|e| field(e, 0)).collect()
    }

    /// Check that every pool has entries and leveled pools carry integer levels.
    pub fn validate(&self) -> ContentResult<()> {
        for pool in Pool::ALL {
            let entries = self.pool(pool);
            if entries.is_empty() {
                return Err(ContentError::EmptyPool(pool));
            }
            if pool.is_leveled() {
                if let Some(bad) = entries
                    .iter()
                    .find(|e| field(e, 1).trim().parse::<i64>().is_err())
                {
                    return Err(ContentError::BadEntry {
                        pool,
                        entry: bad.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse and validate tables from JSON.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load and validate tables from a JSON file.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        ContentTables::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_builtin_pools() {
        let tables =
            ContentTables::from_json(r#"{"monsters": ["Dust Bunny|0|fluff"]}"#).unwrap();
        assert_eq!(tables.monsters, vec!["Dust Bunny|0|fluff".to_string()]);
        assert_eq!(tables.spells.len(), SPELLS.len());
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = ContentTables::from_json(r#"{"titles": []}"#).unwrap_err();
        assert!(matches!(err, ContentError::EmptyPool(Pool::Titles)));
    }

    #[test]
    fn leveled_entry_without_level_is_rejected() {
        let err = ContentTables::from_json(r#"{"weapons": ["Spoon"]}"#).unwrap_err();
        assert!(matches!(err, ContentError::BadEntry { pool: Pool::Weapons, .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(&path, r#"{"titles": ["Dame"]}"#).unwrap();
        let tables = ContentTables::load(&path).unwrap();
        assert_eq!(tables.names(Pool::Titles), vec!["Dame"]);
    }

    #[test]
    fn names_strip_extra_fields() {
        let tables = ContentTables::default();
        assert_eq!(tables.names(Pool::Races)[0], "Half Orc");
    }
}

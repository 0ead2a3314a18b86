use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    DuplicateName { kind: &'static str, name: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name '{name}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use sentinel_data::{GameDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             name: "Player".into(),
///             description: "A hero".into(),
///             start_room: "start".into(),
///         },
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         locked: false,
///         required_level: 0,
///         exits: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut puzzles = HashSet::new();
    let mut npcs = HashSet::new();

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "puzzle",
        world.puzzles.iter().map(|p| p.id.as_str()),
        &mut puzzles,
        &mut errors,
    );
    track_ids("npc", world.npcs.iter().map(|n| n.id.as_str()), &mut npcs, &mut errors);

    // player input resolves items by display name, so names must not collide
    let mut item_names = HashSet::new();
    for item in &world.items {
        if !item_names.insert(item.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateName {
                kind: "item",
                name: item.name.clone(),
            });
        }
    }

    let ids = IdSets {
        rooms: &rooms,
        items: &items,
        npcs: &npcs,
    };

    if world.game.player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.player.start_room,
            ids.rooms,
            "game player start room".to_string(),
            &mut errors,
        );
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has duplicate exit '{}'", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                ids.rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
    }

    for item in &world.items {
        validate_location(&item.location, &ids, &mut errors, &format!("item '{}'", item.id));
        if item.credential_level == Some(0) {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' credential level must be above zero", item.id),
            });
        }
    }

    for puzzle in &world.puzzles {
        let context = format!("puzzle '{}'", puzzle.id);
        check_ref("room", &puzzle.room, ids.rooms, context.clone(), &mut errors);
        if let Some(room) = &puzzle.unlocks {
            check_ref("room", room, ids.rooms, format!("{context} unlocks"), &mut errors);
        }
        match &puzzle.challenge {
            ChallengeDef::Password(password) => {
                if password.is_empty() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("{context} has an empty password"),
                    });
                }
            },
            ChallengeDef::Items(required) => {
                if required.is_empty() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("{context} requires an empty item set"),
                    });
                }
                for item in required {
                    check_ref("item", item, ids.items, format!("{context} required items"), &mut errors);
                }
            },
        }
        for reward in &puzzle.rewards {
            check_ref("item", reward, ids.items, format!("{context} rewards"), &mut errors);
            if let Some(def) = world.items.iter().find(|item| &item.id == reward)
                && def.location != LocationRef::Nowhere
            {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} reward '{reward}' must start Nowhere"),
                });
            }
        }
    }

    for npc in &world.npcs {
        let context = format!("npc '{}'", npc.id);
        validate_location(&npc.location, &ids, &mut errors, &context);
        if npc.location == LocationRef::Inventory {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} cannot start in the player's inventory"),
            });
        }
        if npc.dialogue.is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has no dialogue"),
            });
        }
    }

    let mut reaction_keys = HashSet::new();
    for reaction in &world.reactions {
        let context = format!("reaction '{}' + '{}'", reaction.npc, reaction.item);
        check_ref("npc", &reaction.npc, ids.npcs, context.clone(), &mut errors);
        check_ref("item", &reaction.item, ids.items, context.clone(), &mut errors);
        if !reaction_keys.insert((reaction.npc.as_str(), reaction.item.as_str())) {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} is defined more than once"),
            });
        }
        for effect in &reaction.effects {
            if let ReactionEffectDef::Unlock { room } = effect {
                check_ref("room", room, ids.rooms, context.clone(), &mut errors);
            }
        }
    }

    errors
}

struct IdSets<'a> {
    rooms: &'a HashSet<String>,
    items: &'a HashSet<String>,
    npcs: &'a HashSet<String>,
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

fn validate_location(loc: &LocationRef, ids: &IdSets<'_>, errors: &mut Vec<ValidationError>, context: &str) {
    match loc {
        LocationRef::Inventory | LocationRef::Nowhere => {},
        LocationRef::Room(room) => {
            check_ref("room", room, ids.rooms, context.to_string(), errors);
        },
    }
}

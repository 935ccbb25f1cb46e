//! Built-in first-aid content.

use crate::model::{ContentError, ContentStore, Topic};

struct TopicSeed {
    name: &'static str,
    steps: &'static [&'static str],
    image: &'static str,
    emergency: &'static [&'static str],
}

const SEEDS: &[TopicSeed] = &[
    TopicSeed {
        name: "Bleeding",
        steps: &[
            "Stay calm and reassure the injured person.",
            "If available, wash hands or wear gloves.",
            "Apply direct pressure on the wound with a clean cloth.",
            "Do NOT remove soaked cloth — add more layers.",
            "Raise the injured limb above heart level.",
            "Once bleeding reduces, clean gently with clean water.",
            "Cover with a sterile bandage.",
        ],
        image: "images/bleeding.jpg",
        emergency: &[
            "Blood is spurting.",
            "Bleeding continues after 10 minutes.",
            "An object is stuck inside the wound.",
        ],
    },
    TopicSeed {
        name: "Burns",
        steps: &[
            "Move the person away from the heat source.",
            "Cool the burn under running water for 20 minutes.",
            "Remove rings or tight items before swelling starts.",
            "DO NOT apply toothpaste, butter, or oils.",
            "Cover loosely with a clean non-stick cloth.",
            "Do NOT burst blisters.",
        ],
        image: "images/burns.jpg",
        emergency: &[
            "Burn is deep, white, or charred.",
            "Electrical or chemical burns.",
            "Burn affects face or covers a large area.",
        ],
    },
    TopicSeed {
        name: "Choking",
        steps: &[
            "If they can cough, encourage them to keep coughing.",
            "If they cannot breathe: give 5 back blows.",
            "Then give 5 abdominal thrusts (Heimlich maneuver).",
            "Repeat 5 back blows + 5 abdominal thrusts.",
            "If person collapses, start CPR.",
        ],
        image: "images/choking.jpg",
        emergency: &["Person becomes unconscious.", "Choking does not clear."],
    },
    TopicSeed {
        name: "Fracture",
        steps: &[
            "Do NOT move the injured area.",
            "Keep the person calm and still.",
            "Support limb using a splint (wood/cardboard).",
            "Apply ice wrapped in cloth.",
            "Check skin colour and sensation.",
            "Do NOT push exposed bone back inside.",
        ],
        image: "images/fracture.jpg",
        emergency: &["Bone is visible.", "Limb looks twisted or deformed."],
    },
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

/// The four bundled topics in menu order.
///
/// # Errors
///
/// Only fails if the bundled tables above are edited into an invalid shape.
pub fn try_builtin() -> Result<ContentStore, ContentError> {
    let topics = SEEDS
        .iter()
        .map(|seed| {
            Topic::new(
                seed.name,
                owned(seed.steps),
                seed.image,
                owned(seed.emergency),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    ContentStore::new(topics)
}

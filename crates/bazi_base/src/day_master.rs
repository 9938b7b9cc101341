//! Day-Master identity profiles, one per heavenly stem.

use serde::Serialize;

use crate::element::Element;
use crate::stem::{Polarity, Stem};

/// Display profile for a Day-Master stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMasterIdentity {
    pub stem: Stem,
    pub title: &'static str,
    pub traits: &'static str,
    pub takeaway: &'static str,
    pub element: Element,
    pub polarity: Polarity,
}

struct Profile {
    title: &'static str,
    traits: &'static str,
    takeaway: &'static str,
}

const PROFILES: [Profile; 10] = [
    Profile {
        title: "The Resolute Oak Person",
        traits: "Steady growth and long-range vision; anchors big projects.",
        takeaway: "Lean on your endurance when a team loses focus. Stay open to new methods so steadiness does not turn rigid.",
    },
    Profile {
        title: "The Adaptive Willow Person",
        traits: "Flexible thinker; links ideas and people with ease.",
        takeaway: "Your agility makes you a connector, so translate between specialists. Pick one root project to deepen instead of spreading thin.",
    },
    Profile {
        title: "The Radiant Sun Person",
        traits: "Energises groups and sparks momentum.",
        takeaway: "People mirror your enthusiasm, so set the tone on purpose. Schedule quiet time to keep from burning out.",
    },
    Profile {
        title: "The Enduring Ember Person",
        traits: "Sustains warm focus; mentors and refines goals.",
        takeaway: "Your steady glow shines in one-to-one guidance. When recognition is slow to come, celebrate small wins.",
    },
    Profile {
        title: "The Grounded Mountain Person",
        traits: "Reliable planner; surveys the whole terrain before acting.",
        takeaway: "Patience lets you solve problems others rush past. Keep listening to feedback so analysis never becomes immobility.",
    },
    Profile {
        title: "The Cultivating Marble Person",
        traits: "Patient craftsman; turns rough ideas into polished results.",
        takeaway: "Your eye for detail builds lasting value, so own the refinement phase. Let deadlines temper perfectionism.",
    },
    Profile {
        title: "The Strategic Sword Person",
        traits: "Decisive and direct; cuts through complexity to solutions.",
        takeaway: "Teams rely on your clarity to unblock consensus. Pair quick judgement with empathy to avoid unintended cuts.",
    },
    Profile {
        title: "The Discerning Jewel Person",
        traits: "Precise and value-driven; brings hidden quality to light.",
        takeaway: "You spot what is precious in tasks and in people. Not everyone wants the same polish, so choose your battles.",
    },
    Profile {
        title: "The Dynamic Wave Person",
        traits: "Exploratory big-picture thinker who drives new ventures.",
        takeaway: "Your breadth fuels innovation and finds routes others miss. Anchor ideas with concrete milestones so they do not dissipate.",
    },
    Profile {
        title: "The Reflective Rain Person",
        traits: "Calm source of insight; nourishes teams with clarity.",
        takeaway: "Quiet observation finds root causes others overlook. Share insights early rather than holding them back.",
    },
];

/// Identity profile of a Day-Master stem.
pub fn day_master_identity(stem: Stem) -> DayMasterIdentity {
    let p = &PROFILES[stem.index() as usize];
    DayMasterIdentity {
        stem,
        title: p.title,
        traits: p.traits,
        takeaway: p.takeaway,
        element: stem.element(),
        polarity: stem.polarity(),
    }
}

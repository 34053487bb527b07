//! Fixed art for each scene panel.
//!
//! Every piece is plain ASCII so it lines up the same in any terminal; the
//! Unicode variants only swap in a few decorative glyphs of width one.

use tapjourney_engine::Scene;

const VILLAGE_NIGHT: &[&str] = &[
    r"    *        .      (    *      .    ",
    r"  .     *        .   `-'     *       ",
    r"        /\          .      /\        ",
    r"   /\  /  \   _____       /  \  /\   ",
    r"  /  \/ [] \ |  _  |  /\ / [] \/  \  ",
    r"  |[]|  __ | | |_| | /  \| __  |[]|  ",
    r" _|__|_|__|_|_|___|_|_||_|_|__|_|__|_",
];

const NPC: &[&str] = &[
    r"          _____             ",
    r"         /     \            ",
    r"        | o   o |   Ola,    ",
    r"        |   ^   |  viajante!",
    r"         \ \_/ /            ",
    r"       ___|___|___          ",
    r"      /  |     |  \         ",
];

const TRAVELER: &[&str] = &[
    r"            ___           ",
    r"           (o.o)   |      ",
    r"          __|_|__  |      ",
    r"         /  | |  \_|      ",
    r"            | |    |      ",
    r"           _| |_   |      ",
    r"   ~~~~~~~~~~~~~~~~~~~~~~ ",
];

const CONGRATULATIONS: &[&str] = &[
    r"    \   *    .   *    /     ",
    r"  *   .-------------.   *   ",
    r"  .   |  PARABENS!  |   .   ",
    r"  *   '-------------'   *   ",
    r"    /   *  \o/  *    \      ",
    r"            |               ",
    r"           / \              ",
];

/// Lines of art for `scene`.
#[must_use]
pub fn scene_art(scene: Scene) -> &'static [&'static str] {
    match scene {
        Scene::VillageNight => VILLAGE_NIGHT,
        Scene::Npc => NPC,
        Scene::Traveler => TRAVELER,
        Scene::Congratulations => CONGRATULATIONS,
    }
}

/// Swap ASCII sparkles for Unicode ones unless the terminal is ASCII-only.
#[must_use]
pub fn decorate(line: &str, ascii_only: bool) -> String {
    if ascii_only {
        return line.to_string();
    }
    line.replace('*', "✦")
}

//! Narrative stages derived from journey progress.

use crate::Target;

/// Fraction of the target at which the journey starts warming up.
const WARMING_RATIO: f64 = 0.33;
/// Fraction of the target at which the welcoming band begins.
const WELCOMING_RATIO: f64 = 0.66;

/// Which narrative/scene pair is on screen.
///
/// Never stored; always recomputed from progress, target and the give-up flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Below 33% of the target: cold and dark.
    Beginning,
    /// From 33% of the target.
    Warming,
    /// From 66% of the target, up to but excluding the target itself.
    Welcoming,
    /// Progress reached the target.
    Completed,
    /// The player gave up and declined a new game.
    GaveUp,
}

impl Stage {
    /// Select the stage for the given counters.
    ///
    /// Completion wins over everything, give-up wins over the three progress
    /// bands. Band thresholds compare in floating point against
    /// `target * ratio`, so `progress = 1, target = 3` is already warming
    /// (`1 >= 0.99`).
    #[must_use]
    pub fn select(progress: u32, target: Target, gave_up: bool) -> Self {
        let goal = target.get();
        if progress >= goal {
            return Stage::Completed;
        }
        if gave_up {
            return Stage::GaveUp;
        }

        let progress = f64::from(progress);
        let goal = f64::from(goal);
        if progress >= goal * WELCOMING_RATIO {
            Stage::Welcoming
        } else if progress >= goal * WARMING_RATIO {
            Stage::Warming
        } else {
            Stage::Beginning
        }
    }

    /// Position of a progress band, `None` for the give-up override.
    #[must_use]
    pub const fn band_index(self) -> Option<u8> {
        match self {
            Stage::Beginning => Some(0),
            Stage::Warming => Some(1),
            Stage::Welcoming => Some(2),
            Stage::Completed => Some(3),
            Stage::GaveUp => None,
        }
    }

    #[must_use]
    pub const fn narrative(self) -> &'static str {
        match self {
            Stage::Beginning => {
                "Você está no início de sua jornada, em um lugar frio e sombrio. A escuridão ao seu redor desafia sua coragem. Continue avançando e veja se consegue encontrar a luz."
            }
            Stage::Warming => {
                "Você sente o ambiente ao seu redor aquecer. A jornada está se tornando mais confortável, mas ainda há um longo caminho a percorrer. Mantenha o foco e siga em frente!"
            }
            Stage::Welcoming => {
                "Agora você está em um lugar acolhedor e cheio de vida. O calor ao seu redor é reconfortante, e o fim da jornada está à vista. Continue, a vitória está próxima!"
            }
            Stage::Completed => {
                "Parabéns! Você chegou ao fim da jornada. Sua determinação o levou ao triunfo. Desfrute da sensação de conquista e da paisagem que você alcançou."
            }
            Stage::GaveUp => {
                "Você decidiu encerrar a jornada por aqui. Às vezes, a melhor escolha é saber a hora de parar. Mas lembre-se, você sempre pode tentar novamente."
            }
        }
    }

    #[must_use]
    pub const fn scene(self) -> Scene {
        match self {
            Stage::Beginning => Scene::VillageNight,
            Stage::Warming => Scene::Npc,
            Stage::Welcoming | Stage::GaveUp => Scene::Traveler,
            Stage::Completed => Scene::Congratulations,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Beginning => "beginning",
            Stage::Warming => "warming",
            Stage::Welcoming => "welcoming",
            Stage::Completed => "completed",
            Stage::GaveUp => "gave_up",
        }
    }
}

/// The illustration shown under the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Medieval village at night.
    VillageNight,
    /// A villager greeting the traveler.
    Npc,
    /// The traveler on the road.
    Traveler,
    /// Celebration banner.
    Congratulations,
}

impl Scene {
    /// Short caption used as the scene panel title.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Scene::VillageNight => "Vila medieval à noite",
            Scene::Npc => "Um morador da vila",
            Scene::Traveler => "O viajante",
            Scene::Congratulations => "Parabéns",
        }
    }
}

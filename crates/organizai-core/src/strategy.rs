//! Study strategies the schedule service can organise blocks around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Strategy {
    #[serde(rename = "Estructura simple")]
    Simple,
    #[default]
    #[serde(rename = "pomodoro")]
    Pomodoro,
    #[serde(rename = "feynman")]
    Feynman,
    #[serde(rename = "mapas")]
    MindMaps,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Simple,
        Strategy::Pomodoro,
        Strategy::Feynman,
        Strategy::MindMaps,
    ];

    /// Value sent to the schedule service.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Simple => "Estructura simple",
            Strategy::Pomodoro => "pomodoro",
            Strategy::Feynman => "feynman",
            Strategy::MindMaps => "mapas",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Simple => "Estructura simple",
            Strategy::Pomodoro => "Técnica Pomodoro",
            Strategy::Feynman => "Técnica Feynman",
            Strategy::MindMaps => "Mapas mentales",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::Simple => "Un enfoque directo y organizado para el estudio",
            Strategy::Pomodoro => {
                "Método de gestión del tiempo que utiliza intervalos de trabajo y descanso"
            }
            Strategy::Feynman => {
                "Método de aprendizaje basado en explicar conceptos con palabras simples"
            }
            Strategy::MindMaps => {
                "Representación visual de información usando diagramas y conexiones"
            }
        }
    }

    pub fn how_it_works(self) -> &'static str {
        match self {
            Strategy::Simple => {
                "Organiza tus tareas por prioridad y disponibilidad, creando bloques de estudio \
                 simples y directos sin técnicas específicas complejas."
            }
            Strategy::Pomodoro => {
                "Trabaja en intervalos de 25 minutos seguidos de descansos de 5 minutos. \
                 Después de 4 pomodoros, toma un descanso más largo de 15-30 minutos."
            }
            Strategy::Feynman => {
                "1) Elige un concepto, 2) Explícalo como si fueras un profesor, \
                 3) Identifica áreas confusas, 4) Revisa y simplifica hasta dominarlo completamente."
            }
            Strategy::MindMaps => {
                "Crea diagramas con un tema central, ramificándose en subtemas conectados con \
                 palabras clave, colores e imágenes para facilitar la memorización."
            }
        }
    }

    pub fn benefits(self) -> &'static [&'static str] {
        match self {
            Strategy::Simple => &[
                "Fácil de implementar y seguir",
                "Ideal para principiantes en organización",
                "Permite flexibilidad en los horarios",
                "Reduce la complejidad de planificación",
            ],
            Strategy::Pomodoro => &[
                "Mejora la concentración y enfoque",
                "Reduce la fatiga mental",
                "Aumenta la productividad",
                "Facilita el seguimiento del progreso",
            ],
            Strategy::Feynman => &[
                "Identifica lagunas en el conocimiento",
                "Mejora la comprensión profunda",
                "Facilita la retención a largo plazo",
                "Desarrolla habilidades de comunicación",
            ],
            Strategy::MindMaps => &[
                "Estimula la creatividad y memoria visual",
                "Facilita la conexión de ideas",
                "Mejora la organización de información",
                "Útil para repaso y síntesis",
            ],
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ValidationError;

    /// Accepts wire values, display names, and the short aliases `simple` / `mapas`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "simple" {
            return Ok(Strategy::Simple);
        }
        Strategy::ALL
            .into_iter()
            .find(|st| st.as_str().to_lowercase() == needle || st.name().to_lowercase() == needle)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "strategy".into(),
                message: format!("unknown strategy '{s}'"),
            })
    }
}

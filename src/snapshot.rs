use engine::Tick;
use models::*;

/// Plain data for a rendering collaborator; the core owns no visual styling
/// beyond the palette color assigned at spawn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderSnapshot {
    pub tick: Tick,
    pub agents: Vec<AgentView>,
    pub foods: Vec<FoodView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgentView {
    pub name: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub short_axis: f64,
    pub long_axis: f64,
    pub flagella_phase: f64,
    pub alive: bool,
}

impl AgentView {
    pub fn of(agent: &Agent) -> AgentView {
        AgentView {
            name: agent.name().to_string(),
            color: agent.color().to_string(),
            x: agent.x(),
            y: agent.y(),
            theta: agent.theta(),
            short_axis: agent.short_axis_,
            long_axis: agent.long_axis_,
            flagella_phase: agent.flagella_phase_,
            alive: agent.alive(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoodView {
    pub x: f64,
    pub y: f64,
}

impl FoodView {
    pub fn of(food: &Food) -> FoodView {
        FoodView {
            x: food.x(),
            y: food.y(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankEntry {
    pub name: String,
    pub size: f64,
}

use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Note,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Length of the leg that arrives at this step; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub cumulative: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        let Some(first) = plan.steps.first() else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        steps.push(RouteStep {
            index: 0,
            name: first.clone(),
            distance: None,
            cumulative: 0.0,
        });

        let mut cumulative = 0.0;
        for (index, leg) in plan.legs.iter().enumerate() {
            cumulative += leg.distance;
            steps.push(RouteStep {
                index: index + 1,
                name: leg.to.clone(),
                distance: Some(leg.distance),
                cumulative,
            });
        }

        Ok(Self {
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            hops: plan.hop_count(),
            total_distance: plan.total_distance,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops)",
            self.start, self.goal, self.hops
        );
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{:.1}, {:.1} total)",
                        step.index, step.name, distance, step.cumulative
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        let _ = writeln!(buffer, "Total distance: {:.1}", self.total_distance);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, `{:.1}` units)",
            self.start, self.goal, self.hops, self.total_distance
        );
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "* {:>2}. **{}** (+`{:.1}`)",
                        step.index, step.name, distance
                    );
                }
                None => {
                    let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.name);
                }
            }
        }
        buffer
    }

    fn render_note(&self) -> String {
        let path = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ");
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Path: {path}");
        let _ = writeln!(buffer, "Total Distance: {:.1} units", self.total_distance);
        buffer
    }
}

//! Static KPI figures backing the Dashboard section.

use serde::Serialize;
use shared::domain::{SdlcPhase, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseMetrics {
    pub phase: SdlcPhase,
    pub completion_hours: u32,
    pub errors: u32,
    pub quality: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub velocity: u32,
    pub quality: u32,
}

/// Narrative read of the figures, shown under the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insight {
    pub headline: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub kpis: &'static [KpiCard],
    pub phases: &'static [PhaseMetrics],
    pub trend: &'static [TrendPoint],
    pub insight: Insight,
}

const KPIS: [KpiCard; 4] = [
    KpiCard {
        title: "Avg. Completion Time",
        value: "42.5h",
        change: "-12%",
        trend: Trend::Down,
    },
    KpiCard {
        title: "Overall Error Rate",
        value: "4.2%",
        change: "-2.1%",
        trend: Trend::Down,
    },
    KpiCard {
        title: "PR Velocity",
        value: "18.5",
        change: "+15%",
        trend: Trend::Up,
    },
    KpiCard {
        title: "Code Quality Score",
        value: "94/100",
        change: "+4%",
        trend: Trend::Up,
    },
];

const PHASES: [PhaseMetrics; 4] = [
    PhaseMetrics {
        phase: SdlcPhase::Ideation,
        completion_hours: 45,
        errors: 12,
        quality: 88,
    },
    PhaseMetrics {
        phase: SdlcPhase::Planning,
        completion_hours: 30,
        errors: 8,
        quality: 92,
    },
    PhaseMetrics {
        phase: SdlcPhase::Design,
        completion_hours: 60,
        errors: 15,
        quality: 85,
    },
    PhaseMetrics {
        phase: SdlcPhase::Implementation,
        completion_hours: 85,
        errors: 22,
        quality: 90,
    },
];

const TREND: [TrendPoint; 6] = [
    TrendPoint {
        month: "Jan",
        velocity: 45,
        quality: 78,
    },
    TrendPoint {
        month: "Feb",
        velocity: 52,
        quality: 82,
    },
    TrendPoint {
        month: "Mar",
        velocity: 48,
        quality: 85,
    },
    TrendPoint {
        month: "Apr",
        velocity: 61,
        quality: 88,
    },
    TrendPoint {
        month: "May",
        velocity: 55,
        quality: 92,
    },
    TrendPoint {
        month: "Jun",
        velocity: 70,
        quality: 94,
    },
];

const INSIGHT: Insight = Insight {
    headline: "Your team's Design velocity is improving, but implementation error density has ticked up in the last 48 hours.",
    recommendation: "Our agents suggest conducting a quick technical peer review on current Implementation tasks to avoid rework later in the sprint.",
};

pub const SNAPSHOT: DashboardSnapshot = DashboardSnapshot {
    kpis: &KPIS,
    phases: &PHASES,
    trend: &TREND,
    insight: INSIGHT,
};

impl DashboardSnapshot {
    pub fn slowest_phase(&self) -> Option<&PhaseMetrics> {
        self.phases.iter().max_by_key(|metrics| metrics.completion_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implementation_is_the_slowest_phase() {
        let slowest = SNAPSHOT.slowest_phase().expect("phases");
        assert_eq!(slowest.phase, SdlcPhase::Implementation);
        assert_eq!(slowest.completion_hours, 85);
    }

    #[test]
    fn snapshot_serializes_trend_as_lowercase() {
        let value = serde_json::to_value(SNAPSHOT).expect("serialize");
        assert_eq!(value["kpis"][0]["trend"], "down");
        assert_eq!(value["phases"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["trend"][5]["month"], "Jun");
        assert!(value["insight"]["headline"]
            .as_str()
            .is_some_and(|text| text.starts_with("Your team's Design velocity")));
    }
}

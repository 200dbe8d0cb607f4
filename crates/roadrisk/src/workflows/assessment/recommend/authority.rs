use super::{dedup_and_cap, AUTHORITY_MAX};
use crate::workflows::assessment::causes::CauseFinding;
use crate::workflows::assessment::domain::SeverityClass;

const FALLBACK: &str = "Commission a comprehensive road safety audit";

/// Infrastructure and policy actions for road authorities, derived from the
/// cause findings plus two severity-gated escalations. At most ten unique
/// items; never empty.
pub fn authority_recommendations(
    causes: &[CauseFinding],
    severity: SeverityClass,
) -> Vec<&'static str> {
    let mut candidates = Vec::new();
    for finding in causes {
        candidates.extend_from_slice(finding_actions(*finding));
    }

    match severity {
        SeverityClass::FatalInjury => {
            candidates.push("Station emergency response capacity near the corridor");
            candidates.push("Commission a black-spot investigation of the location");
        }
        SeverityClass::SeriousInjury => {
            candidates.push("Increase traffic patrol presence at peak risk hours");
            candidates.push("Audit emergency medical response times for the area");
        }
        SeverityClass::SlightInjury => {}
    }

    let mut items = dedup_and_cap(candidates, AUTHORITY_MAX);
    if items.is_empty() {
        items.push(FALLBACK);
    }
    items
}

fn finding_actions(finding: CauseFinding) -> &'static [&'static str] {
    match finding {
        CauseFinding::NightLowVisibility | CauseFinding::DuskLowVisibility => &[
            "Upgrade street lighting along the corridor",
            "Install reflective road markings and signage",
        ],
        CauseFinding::AdverseWeather => &[
            "Deploy weather-activated warning signs",
            "Review drainage capacity along the route",
        ],
        CauseFinding::DenseFog => &[
            "Install fog detection with low-visibility speed advisories",
        ],
        CauseFinding::WetSurface => &[
            "Review drainage capacity along the route",
            "Resurface braking zones with high-friction overlay",
        ],
        CauseFinding::IcySurface => &[
            "Prioritize winter gritting and plowing on the segment",
            "Install ice warning signage at exposed sections",
        ],
        CauseFinding::DamagedPavement => &[
            "Repair carriageway defects and potholes",
            "Increase road surface inspection frequency",
        ],
        CauseFinding::ExcessiveSpeed => &[
            "Install automated speed enforcement cameras",
            "Add traffic calming measures at high-risk sections",
            "Reassess the posted speed limit for the segment",
        ],
        CauseFinding::DriverInexperience => &[
            "Expand graduated licensing and supervised practice programs",
            "Fund defensive driving courses for new drivers",
        ],
        CauseFinding::UnlicensedDriver => &["Increase roadside license checks"],
        CauseFinding::MotorcycleExposure => &[
            "Provide dedicated motorcycle lanes where feasible",
            "Run motorcycle awareness campaigns for all road users",
        ],
        CauseFinding::HeavyVehicle => &[
            "Enforce heavy vehicle inspection and load limits",
            "Restrict heavy vehicle transit during peak hours",
        ],
        CauseFinding::MinimalSafetyEquipment => &[
            "Incentivize adoption of vehicles with modern safety ratings",
            "Mandate periodic vehicle safety inspections",
        ],
        CauseFinding::PedestrianConflict => &[
            "Add signalized pedestrian crossings",
            "Separate footpaths from the carriageway with barriers",
        ],
        CauseFinding::RolloverDynamics => &[
            "Review curve geometry and superelevation",
            "Install guardrails at embankments and drop-offs",
        ],
        CauseFinding::UnderageDriver => &["Strengthen enforcement of the minimum driving age"],
        CauseFinding::OlderDriver => &["Offer voluntary fitness-to-drive assessments"],
        CauseFinding::MultipleFactors => &[],
    }
}

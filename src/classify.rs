//! String-matching heuristics that turn free-text database fields into the
//! coarse categories shown by the demo.
//!
//! All matching is case-insensitive substring matching; the first needle that
//! matches wins.

/// Outcome category of a single recorded vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    InFavor,
    Against,
    Abstain,
    Paired,
}

impl VoteChoice {
    /// Classify a raw vote label, or `None` when no category matches
    pub fn classify(label: &str) -> Option<Self> {
        let label = label.to_lowercase().replace(' ', "_");
        if label.contains("favor") {
            Some(VoteChoice::InFavor)
        } else if label.contains("contra") {
            Some(VoteChoice::Against)
        } else if label.contains("absten") {
            Some(VoteChoice::Abstain)
        } else if label.contains("pareo") {
            Some(VoteChoice::Paired)
        } else {
            None
        }
    }
}

/// Derived lifecycle status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Approved,
    Rejected,
    Archived,
    FirstReading,
    SecondReading,
    ThirdReading,
    InCommittee,
    InProcess,
}

impl BillStatus {
    /// Derive the status from the final result and stage fields.
    ///
    /// A present result decides on its own, even when it matches nothing;
    /// the stage is only consulted when there is no result.
    pub fn derive(result: Option<&str>, stage: Option<&str>) -> Self {
        if let Some(result) = result.filter(|r| !r.is_empty()) {
            let result = result.to_lowercase();
            if result.contains("aprob") {
                BillStatus::Approved
            } else if result.contains("rechaz") {
                BillStatus::Rejected
            } else if result.contains("archiv") {
                BillStatus::Archived
            } else {
                BillStatus::InProcess
            }
        } else if let Some(stage) = stage.filter(|s| !s.is_empty()) {
            let stage = stage.to_lowercase();
            if stage.contains("primer") {
                BillStatus::FirstReading
            } else if stage.contains("segundo") {
                BillStatus::SecondReading
            } else if stage.contains("tercer") {
                BillStatus::ThirdReading
            } else if stage.contains("comision") {
                BillStatus::InCommittee
            } else {
                BillStatus::InProcess
            }
        } else {
            BillStatus::InProcess
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Approved => "Aprobado",
            BillStatus::Rejected => "Rechazado",
            BillStatus::Archived => "Archivado",
            BillStatus::FirstReading => "Primer tramite",
            BillStatus::SecondReading => "Segundo tramite",
            BillStatus::ThirdReading => "Tercer tramite",
            BillStatus::InCommittee => "En comision",
            BillStatus::InProcess => "En tramitacion",
        }
    }
}

/// Chamber a bill originated in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    Deputies,
    Senate,
}

impl Chamber {
    pub fn from_origin(origin: Option<&str>) -> Self {
        match origin {
            Some(origin) if origin.to_lowercase().contains("senado") => Chamber::Senate,
            _ => Chamber::Deputies,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Chamber::Deputies => "Diputados",
            Chamber::Senate => "Senado",
        }
    }
}

/// Cut a title to `max_chars` characters followed by "..." when it is longer
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &title[..end]),
        None => title.to_string(),
    }
}

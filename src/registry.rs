use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Avr partner(s) recognized by a resistance gene. Most R genes map to a
/// single avirulence gene, a few recognize two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvrPartner {
    Single(&'static str),
    Multiple(&'static [&'static str]),
}

impl AvrPartner {
    pub fn names(&self) -> &[&'static str] {
        match self {
            AvrPartner::Single(name) => std::slice::from_ref(name),
            AvrPartner::Multiple(names) => names,
        }
    }

    pub fn joined(&self) -> String {
        self.names().join(", ")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GeneRecord {
    avr_gene: AvrPartner,
    chromosome: &'static str,
}

impl GeneRecord {
    pub fn get_avr_gene(&self) -> &AvrPartner {
        &self.avr_gene
    }

    pub fn get_chromosome(&self) -> &'static str {
        self.chromosome
    }
}

// Known Rlm/LepR resistance genes of Brassica napus against Leptosphaeria
// maculans. "?" marks an unknown chromosome, "Avr?" an uncloned partner.
const RLM_GENE_TABLE: &[(&str, AvrPartner, &str)] = &[
    ("Rlm1", AvrPartner::Single("AvrLm1-L3"), "A07"),
    ("Rlm2", AvrPartner::Single("AvrLm2"), "A10"),
    ("Rlm3", AvrPartner::Single("AvrLm3"), "A07"),
    ("Rlm4", AvrPartner::Single("AvrLm4-7"), "A07"),
    ("Rlm5", AvrPartner::Single("AvrLm5-9"), "A10"),
    ("Rlm6", AvrPartner::Single("AvrLm6"), "A07"),
    ("Rlm7", AvrPartner::Single("AvrLm4-7"), "A07"),
    ("Rlm8", AvrPartner::Single("AvrLm8"), "A?"),
    ("Rlm9", AvrPartner::Single("AvrLm5-9"), "A07"),
    ("Rlm10", AvrPartner::Multiple(&["AvrLm10a", "AvrLm10b"]), "B04"),
    ("Rlm11", AvrPartner::Single("AvrLm11"), "A?"),
    ("Rlm12", AvrPartner::Single("Avr?"), "A01"),
    ("Rlm13", AvrPartner::Single("AvrLm13?"), "C03"),
    ("Rlm14", AvrPartner::Single("AvrLm14"), "?"),
    ("RlmS", AvrPartner::Single("AvrLmS-Lep2"), "?"),
    ("LepR1", AvrPartner::Single("AvrLepR1"), "A02"),
    ("LepR2", AvrPartner::Multiple(&["AvrLmS-Lep2", "AvrLep2"]), "A10"),
    ("LepR3", AvrPartner::Single("AvrLm1-L3"), "A10"),
    ("LepR4a", AvrPartner::Single("AvrLepR4"), "A09"),
    ("LepR4b", AvrPartner::Single("AvrLepR4"), "A09"),
    ("LMJR1", AvrPartner::Single("Avr?"), "B?"),
    ("LMJR2", AvrPartner::Single("Avr?"), "B?"),
    ("rjml2", AvrPartner::Single("Avr?"), "B?"),
];

/// Lookup table from R gene name to its record. Names are matched exactly,
/// case included.
pub struct Registry {
    records: HashMap<&'static str, GeneRecord>,
}

impl Registry {
    pub fn from_entries(entries: &[(&'static str, AvrPartner, &'static str)]) -> Self {
        let mut records = HashMap::new();
        for &(name, avr_gene, chromosome) in entries {
            records.insert(name, GeneRecord { avr_gene, chromosome });
        }
        Registry { records }
    }

    /// The built-in Rlm/LepR table.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: Lazy<Registry> = Lazy::new(|| Registry::from_entries(RLM_GENE_TABLE));
        &BUILTIN
    }

    pub fn lookup(&self, name: &str) -> Option<&GeneRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// One-line report for an R gene, or the fallback message when the name
    /// is unknown.
    pub fn describe(&self, name: &str) -> String {
        match self.records.get(name) {
            Some(record) => format!(
                "{} interacts with {} on chromosome {}.",
                name,
                record.avr_gene.joined(),
                record.chromosome
            ),
            None => String::from("R gene not found. Please check the gene name and try again."),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &GeneRecord)> {
        self.records.iter().map(|(name, record)| (*name, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

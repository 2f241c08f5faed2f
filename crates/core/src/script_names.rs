//! Well-known external script names and the output files they produce.
//!
//! These must match the file names shipped in the script library directory
//! (`SCRIPTS_DIR`).

/// siRNA off-target search. Args: species, IDs, mismatches.
pub const SIRNA_OFF_TARGET_SCRIPT: &str = "siRNAOffTargetSearch.sh";
pub const SIRNA_OFF_TARGET_OUTPUT: &str = "siRNAOffTargetSearchResult.csv";

/// ASO off-target search. Args: species, IDs, mismatches.
pub const ASO_OFF_TARGET_SCRIPT: &str = "ASOOffTargetSearch.sh";
pub const ASO_OFF_TARGET_OUTPUT: &str = "ASOOffTargetSearchResult.csv";

/// Ortholog lookup. Args: Ensembl ID, species, requested species.
pub const ORTHOLOGS_SCRIPT: &str = "getOrthologs.sh";
pub const ORTHOLOGS_OUTPUT: &str = "seqAnnotation.csv";

/// Oligo enumeration. Args: secondary transcript IDs, primary transcript ID,
/// oligo length.
pub const ENUMERATION_SCRIPT: &str = "Enumeration.sh";
pub const ENUMERATION_OUTPUT: &str = "EnumerationResult.csv";

/// Sequence file left in the run directory by the enumeration script.
pub const ENUMERATION_SEQUENCE_FILE: &str = "sequence.fa";

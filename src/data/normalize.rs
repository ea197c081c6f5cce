// ---------------------------------------------------------------------------
// Component name normalisation
// ---------------------------------------------------------------------------

/// Canonicalise a component name read from the dataset.
///
/// `"BODY-LWR-FRT-STRUCTURE"` → `"body_lwr_frt_structure"`
pub fn normalize_dataset_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace('-', "_")
}

/// Canonicalise the free text that follows the range numbers in a manifest line.
///
/// Strips one leading `m_`, then drops everything from the first space or
/// period onward (annotation tokens, `.k` extensions):
/// `"M_BODY_LWR_FRT_STRUCTURE_EVEK_SCC_LHD_V0.k"` → `"body_lwr_frt_structure_evek_scc_lhd_v0"`
pub fn normalize_manifest_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let name = lowered.strip_prefix("m_").unwrap_or(&lowered);
    let cut = name.find([' ', '.']).unwrap_or(name.len());
    name[..cut].replace('-', "_")
}

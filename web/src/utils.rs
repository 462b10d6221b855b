/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Whole seconds as shown in the HUD, capped so the counter never grows wider than the panel.
pub(crate) fn format_seconds(secs: u32) -> String {
    match secs {
        0..10000 => format!("{}秒", secs),
        10000.. => "9999秒".to_string(),
    }
}

/// Whole seconds as printed once the board is clear, never capped.
pub(crate) fn format_total_seconds(secs: u32) -> String {
    format!("{}秒", secs)
}

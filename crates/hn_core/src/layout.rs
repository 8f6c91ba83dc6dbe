/// Minimum viewport width paired with the page size used from that width up.
pub const PAGE_SIZE_BREAKPOINTS: [(u32, usize); 6] = [
    (2560, 50),
    (1920, 36),
    (1440, 30),
    (1200, 24),
    (1024, 18),
    (768, 12),
];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Below this width the grid layout is not offered.
pub const LIST_ONLY_BELOW: u32 = 700;

pub fn page_size_for_width(width: u32) -> usize {
    PAGE_SIZE_BREAKPOINTS
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map_or(DEFAULT_PAGE_SIZE, |(_, size)| *size)
}

pub fn forces_list_mode(width: u32) -> bool {
    width < LIST_ONLY_BELOW
}

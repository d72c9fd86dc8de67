/// Renders a vertex sequence as `0 -> 1 -> 2`. An empty walk renders as an
/// empty string.
pub fn format_walk(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

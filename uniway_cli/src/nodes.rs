use comfy_table::Table;
use uniway_routing::{
    campus::{SCHEMATIC_LOCATIONS, campus_network, schematic_graph},
    graph::Coordinate,
};

pub fn run_nodes() -> anyhow::Result<()> {
    let network = campus_network()?;
    let graph = network.graph();
    let zones = network.selector().zones();

    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Lat", "Lng", "Zone", "Links"]);

    for (index, node) in graph.nodes() {
        let (lat, lng, zone) = match node.coordinate() {
            Coordinate::Geo(point) => {
                let membership = zones.classify(point);
                let zone = match (membership.residential, membership.core) {
                    (true, true) => "residential, core",
                    (true, false) => "residential",
                    (false, true) => "core",
                    (false, false) => "",
                };
                (point.lat.to_string(), point.lng.to_string(), zone)
            }
            Coordinate::Planar { .. } => (String::new(), String::new(), ""),
        };

        table.add_row(vec![
            node.id().to_string(),
            node.label().unwrap_or_default().to_string(),
            lat,
            lng,
            zone.to_string(),
            graph.edges(index).len().to_string(),
        ]);
    }

    println!("{table}");
    let (min, max) = (network.bounds().min(), network.bounds().max());
    println!(
        "{} nodes, {} edges, coverage {:.6},{:.6} to {:.6},{:.6}",
        graph.node_count(),
        graph.edge_count(),
        min.lat,
        min.lng,
        max.lat,
        max.lng
    );

    Ok(())
}

pub fn run_schematic() -> anyhow::Result<()> {
    let graph = schematic_graph()?;

    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Category", "X", "Y", "Neighbours"]);

    for (location, (index, _)) in SCHEMATIC_LOCATIONS.iter().zip(graph.nodes()) {
        let neighbours: Vec<&str> = graph
            .edges(index)
            .iter()
            .map(|edge| graph.node(edge.to).id())
            .collect();

        table.add_row(vec![
            location.id.to_string(),
            location.name.to_string(),
            location.category.to_string(),
            location.x.to_string(),
            location.y.to_string(),
            neighbours.join(", "),
        ]);
    }

    println!("{table}");
    println!(
        "{} locations, {} links (display only, routing uses the campus graph)",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}

pub const MAIN_AFTER_HELP: &str = r#"
geodecimate reads newline-delimited geometries from STDIN (or --input)
and writes one result per line to STDOUT.

Each line may be GeoJSON (Geometry, Feature, or FeatureCollection) or WKT.
GeoJSON "type" members are matched without regard to case.
"#;

pub const SIMPLIFY_ABOUT: &str = "Reduce the point count of line and polygon geometries";

pub const SIMPLIFY_AFTER_HELP: &str = r#"
Every coordinate sequence (each LineString, each polygon ring) is reduced
independently in two passes using the same tolerance:

  1. Radial distance: drop points within TOLERANCE of the last kept point.
  2. Douglas-Peucker: drop points deviating less than TOLERANCE from the
     line between the kept points on either side.

The first and last point of every sequence are always kept. TOLERANCE is
in coordinate units (degrees for lon/lat data). Points and MultiPoints
cannot be simplified and abort the run.

Example:

$ echo '{"type":"LineString","coordinates":[[0,0],[0.3,0.3],[1,1],[2,2]]}' | geodecimate simplify 1
{"coordinates":[[0.0,0.0],[2.0,2.0]],"type":"LineString"}
"#;

pub const TOLERANCE_ARG_HELP: &str =
    "Distance below which points are dropped, in coordinate units.\nMust be a non-negative number, e.g. 0.001.";

pub const COUNT_ABOUT: &str = "Print the number of coordinates in each input";

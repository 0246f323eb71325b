//! Parse an inline annotation document and run the query layer over it.
//!
//! Run with: `cargo run -p sextant --example load_and_query`

use sextant::{
    parse_str,
    query::{DimensionQuery, Statistics, search_by_dimension, search_by_type},
    registry::DiagramRegistry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>actor</type>
              <boundary xmin="10" ymin="10" xmax="60" ymax="90"/>
            </object>
            <object>
              <type>class</type>
              <boundary xmin="0" ymin="0" xmax="500" ymax="400"/>
              <difficult>true</difficult>
            </object>
          </objects>
        </annotation>
    "#;

    let mut registry = DiagramRegistry::new();
    registry.insert(parse_str(source, "a")?.into_diagram())?;

    println!("diagrams with an actor: {:?}", search_by_type(&registry, "actor"));

    let wide = DimensionQuery::new().with_min_width(100);
    println!("diagrams with a wide object: {:?}", search_by_dimension(&registry, &wide));

    if let Some(stats) = Statistics::collect(&registry) {
        println!("{stats}");
    }

    Ok(())
}

//! Declaration extraction over realistic headers.

use std::path::Path;

use cdoc_core::DeclKind;
use cdoc_parser::{ParserArgs, SourceParser, TreeSitterParser, global_declarations};
use pretty_assertions::assert_eq;

fn extract(path: &str, source: &str, args: &ParserArgs) -> Vec<(String, DeclKind, u32)> {
    let tree = TreeSitterParser
        .parse(Path::new(path), source, args)
        .expect("header should parse");
    global_declarations(&tree)
        .into_iter()
        .map(|d| (d.name, d.kind, d.position.line))
        .collect()
}

#[test]
fn guarded_c_header() {
    let source = "#ifndef RING_H
#define RING_H

#include <stddef.h>

typedef struct ring ring_t;

/* Number of rings allocated. */
extern size_t ring_count;

/// Allocate a ring holding `cap` bytes.
ring_t *ring_new(size_t cap);

// Release a ring.
void ring_free(ring_t *r);

#endif
";
    assert_eq!(
        extract("ring.h", source, &ParserArgs::default()),
        vec![
            ("ring_count".to_string(), DeclKind::Variable, 9),
            ("ring_new".to_string(), DeclKind::Function, 12),
            ("ring_free".to_string(), DeclKind::Function, 15),
        ]
    );
}

#[test]
fn cpp_header_with_one_namespace() {
    let source = "\
#pragma once
#include <string>

namespace geo {

struct Point {
    double x, y;
};

// Distance between two points.
double distance(const Point &a, const Point &b);

extern const Point origin;

}  // namespace geo

int version();
";
    assert_eq!(
        extract("geo.hpp", source, &ParserArgs::default()),
        vec![
            ("distance".to_string(), DeclKind::Function, 11),
            ("origin".to_string(), DeclKind::Variable, 13),
        ]
    );
}

#[test]
fn language_flag_selects_cpp_for_h_files() {
    let source = "namespace n {\nint f();\n}\n";
    assert_eq!(
        extract("n.h", source, &ParserArgs::from_pipe_separated("-x|c++")),
        vec![("f".to_string(), DeclKind::Function, 2)]
    );
}

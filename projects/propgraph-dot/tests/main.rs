use propgraph_dot::{to_dot, DotOptions, DotWriter};
use propgraph_parser::parse;

fn count_lines(dot: &str) -> (usize, usize) {
    let nodes = dot.lines().filter(|l| l.contains("[label=")).count();
    let edges = dot.lines().filter(|l| l.contains(" -> ")).count();
    (nodes, edges)
}

#[test]
fn test_nested_formula_output() {
    let expr = parse("((p=>q)^p)").unwrap();
    let expected = "digraph G {
n0 [label=\"^\"];
n1 [label=\"=>\"];
n2 [label=\"p\"];
n3 [label=\"q\"];
n1 -> n2;
n1 -> n3;
n4 [label=\"p\"];
n0 -> n1;
n0 -> n4;
}";
    assert_eq!(to_dot(&expr), expected);
}

#[test]
fn test_single_atom() {
    let expr = parse("1").unwrap();
    assert_eq!(to_dot(&expr), "digraph G {\nn0 [label=\"1\"];\n}");
}

#[test]
fn test_negation_has_one_edge() {
    let expr = parse("~~q").unwrap();
    let dot = to_dot(&expr);
    assert!(dot.contains("n0 [label=\"~\"];\nn1 [label=\"~\"];\nn2 [label=\"q\"];\nn1 -> n2;\nn0 -> n1;\n"));
}

#[test]
fn test_line_counts_match_tree() {
    for source in ["p", "~p", "p<=>q", "~(p=>q)<=>~~r^1", "(pos)^~(t=>u)o(v<=>0)"] {
        let expr = parse(source).unwrap();
        let stats = expr.stats();
        let (nodes, edges) = count_lines(&to_dot(&expr));
        assert_eq!(nodes, stats.nodes(), "node lines for {source}");
        assert_eq!(edges, stats.unary + 2 * stats.binary, "edge lines for {source}");
    }
}

#[test]
fn test_ids_restart_per_call() {
    let writer = DotWriter::new(DotOptions::default());
    let first = writer.write(&parse("p^q").unwrap());
    let second = writer.write(&parse("p^q").unwrap());
    assert_eq!(first, second);
    assert!(second.contains("n0 [label=\"^\"];"));
}

#[test]
fn test_custom_options() {
    let writer = DotWriter::new(DotOptions { graph_name: "formula".to_string(), node_prefix: "v".to_string() });
    let dot = writer.write(&parse("~s").unwrap());
    assert!(dot.starts_with("digraph formula {\n"));
    assert!(dot.contains("v0 -> v1;"));
    assert!(dot.ends_with('}'));
}

#[test]
fn test_long_chain_output() {
    let expr = parse(&format!("p{}", "^q".repeat(50_000))).unwrap();
    let dot = to_dot(&expr);
    let (nodes, edges) = count_lines(&dot);
    assert_eq!(nodes, 100_001);
    assert_eq!(edges, 100_000);
    assert!(dot.starts_with("digraph G {\nn0 [label=\"^\"];\nn1 [label=\"^\"];\n"));
    assert!(dot.ends_with("n0 -> n1;\nn0 -> n100000;\n}"));
}

#[test]
fn test_deep_negation_output() {
    let expr = parse(&format!("{}p", "~".repeat(100_000))).unwrap();
    let (nodes, edges) = count_lines(&to_dot(&expr));
    assert_eq!(nodes, 100_001);
    assert_eq!(edges, 100_000);
}

#[test]
fn test_prefix_needing_quotes() {
    let writer = DotWriter::new(DotOptions { graph_name: "G".to_string(), node_prefix: "a-b".to_string() });
    let dot = writer.write(&parse("~p").unwrap());
    assert_eq!(dot, "digraph G {\n\"a-b0\" [label=\"~\"];\n\"a-b1\" [label=\"p\"];\n\"a-b0\" -> \"a-b1\";\n}");

    let writer = DotWriter::new(DotOptions { graph_name: "G".to_string(), node_prefix: "my node".to_string() });
    assert!(writer.write(&parse("p").unwrap()).contains("\"my node0\" [label=\"p\"];"));
}

#[test]
fn test_empty_prefix_uses_numerals() {
    let writer = DotWriter::new(DotOptions { graph_name: "G".to_string(), node_prefix: String::new() });
    assert_eq!(writer.write(&parse("~p").unwrap()), "digraph G {\n0 [label=\"~\"];\n1 [label=\"p\"];\n0 -> 1;\n}");
}

#[test]
fn test_keyword_graph_name() {
    let writer = DotWriter::new(DotOptions { graph_name: "node".to_string(), node_prefix: "n".to_string() });
    assert!(writer.write(&parse("p").unwrap()).starts_with("digraph \"node\" {\n"));
}

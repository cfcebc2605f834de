//! Highlight output rules over real grammars
//!
//! Every language is run over a realistic snippet and each rendered line is
//! checked for merged runs, fill placement and full coverage.

mod common;

use common::{assert_line_rules, highlight, source_lines};
use syntax_server::{LanguageId, LanguageRegistry, Position};

const SNIPPETS: &[(&str, &str)] = &[
    (
        "bash",
        "#!/bin/bash\n# greet\nfor f in *.txt; do\n  echo \"file: $f\"\ndone\n",
    ),
    (
        "c",
        "#include <stdio.h>\n/* entry\n   point */\nint main(void) {\n    printf(\"%d\\n\", 42);\n    return 0;\n}\n",
    ),
    (
        "cpp",
        "#include <vector>\nnamespace app {\nclass Point { public: int x; };\n}\nauto v = std::vector<int>{1, 2};\n",
    ),
    (
        "csharp",
        "// entry\nusing System;\n\nclass Program {\n    static void Main() {\n        Console.WriteLine(\"hi\");\n    }\n}\n",
    ),
    (
        "css",
        ":root { --gap: 4px; }\n.button:hover {\n  color: #fff;\n  margin: 0 auto;\n}\n",
    ),
    (
        "elm",
        "module Main exposing (main)\n\n-- entry\nimport Html\n\nmain =\n    Html.text \"hi\"\n",
    ),
    (
        "go",
        "package main\n\nimport \"fmt\"\n\n// main prints\nfunc main() {\n\tfmt.Println(`raw\nstring`, 3.14)\n}\n",
    ),
    (
        "hcl",
        "# config\nresource \"aws_instance\" \"web\" {\n  ami   = \"ami-123\"\n  count = 2\n}\n",
    ),
    (
        "html",
        "<!DOCTYPE html>\n<html>\n  <body class=\"x\">\n    <!-- note -->\n    <p>Hi</p>\n  </body>\n</html>\n",
    ),
    (
        "java",
        "package demo;\n\npublic class Main {\n    /** Entry. */\n    public static void main(String[] args) {\n        System.out.println(\"hi\");\n    }\n}\n",
    ),
    (
        "javascript",
        "import x from 'y';\nconst tpl = `a ${b}\nc`;\nfunction f(a, b = 2) { return a ?? b; }\n",
    ),
    (
        "json",
        "{\n  \"name\": \"demo\",\n  \"count\": 3,\n  \"ok\": true,\n  \"none\": null\n}\n",
    ),
    (
        "lua",
        "-- greet\nlocal function hi(name)\n  return \"Hello, \" .. name\nend\n",
    ),
    (
        "ocaml",
        "(* entry *)\nlet rec fact n =\n  if n = 0 then 1 else n * fact (n - 1)\n",
    ),
    (
        "php",
        "<?php\nfunction greet(string $name): string {\n    return \"Hello, $name\";\n}\necho greet('x');\n",
    ),
    (
        "python",
        "import os\n\n\nclass A:\n    \"\"\"Doc\n    string.\"\"\"\n    def f(self, x=1):\n        return f\"{x}\"  # done\n",
    ),
    (
        "ruby",
        "# greet\nclass Greeter\n  def hi(name)\n    \"Hello, #{name}\"\n  end\nend\n",
    ),
    (
        "rust",
        "/// Docs\n#[derive(Debug)]\nstruct S<'a> { s: &'a str }\n\nfn main() {\n    let r = r#\"raw\nline\"#;\n    println!(\"{}\", r);\n}\n",
    ),
    (
        "scala",
        "// entry\nobject Main {\n  def main(args: Array[String]): Unit =\n    println(s\"hi ${args.length}\")\n}\n",
    ),
    (
        "toml",
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dependencies]\nserde = { version = \"1\", features = [\"derive\"] }\n",
    ),
    (
        "tsx",
        "type P = { name: string };\nexport const C = ({ name }: P) => <div>{name}</div>;\n",
    ),
    (
        "typescript",
        "interface A { x: number }\nenum E { One = 1 }\nexport function f<T>(v: T): T {\n  return v as T;\n}\n",
    ),
    (
        "yaml",
        "# config\nname: demo\nlist:\n  - 1\n  - true\nblock: |\n  multi\n  line\n",
    ),
];

fn check_rules(registry: &LanguageRegistry, lang: &str, source: &str) {
    let out = highlight(registry, lang, source);
    let lines = source_lines(source);
    let newline_count = lines.len() - 1;

    for (i, line) in out.lines.iter().enumerate() {
        let row = out.row_of(i);
        let context = format!("{} line {}", lang, row);
        let text = lines
            .get(row)
            .unwrap_or_else(|| panic!("{}: rendered past end of source", context));
        assert_line_rules(
            line,
            out.start_column_of(i),
            text.len(),
            row < newline_count,
            &context,
        );
    }

    // Every source line from the origin up to the last non-empty one is rendered
    let expected = if source.ends_with('\n') {
        newline_count - out.origin.row
    } else {
        newline_count + 1 - out.origin.row
    };
    assert_eq!(out.lines.len(), expected, "{}: rendered line count", lang);
}

#[test]
fn test_every_language_obeys_line_rules() {
    let registry = LanguageRegistry::new();
    assert_eq!(SNIPPETS.len(), LanguageId::ALL.len());
    for (lang, source) in SNIPPETS {
        check_rules(&registry, lang, source);
    }
}

#[test]
fn test_snippets_without_trailing_newline() {
    let registry = LanguageRegistry::new();
    for (lang, source) in SNIPPETS {
        check_rules(&registry, lang, source.trim_end_matches('\n'));
    }
}

#[test]
fn test_every_language_colors_something() {
    let registry = LanguageRegistry::new();
    for (lang, source) in SNIPPETS {
        let out = highlight(&registry, lang, source);
        let colored = out
            .lines
            .iter()
            .flat_map(|line| &line.runs)
            .any(|run| !run.color().is_empty());
        assert!(colored, "{}: no colored runs", lang);
    }
}

#[test]
fn test_highlight_is_deterministic() {
    let registry = LanguageRegistry::new();
    for (lang, source) in SNIPPETS {
        let first = highlight(&registry, lang, source);
        let second = highlight(&registry, lang, source);
        assert_eq!(first, second, "{}: output differs between runs", lang);
    }
}

#[test]
fn test_leading_blank_lines_shift_origin() {
    let registry = LanguageRegistry::new();
    let source = "\n\nfn main() {}\n";
    let out = highlight(&registry, "rust", source);
    assert!(out.origin <= Position::new(2, 0));
    check_rules(&registry, "rust", source);
}

#[test]
fn test_multi_byte_text_counts_bytes() {
    let registry = LanguageRegistry::new();
    let source = "let s = \"héllo wörld\";";
    let out = highlight(&registry, "javascript", source);
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.lines[0].finite_width(), source.len());
}

#[test]
fn test_deeply_nested_source() {
    let registry = LanguageRegistry::new();
    let depth = 500;
    let source = format!("x = {}1{}\n", "[".repeat(depth), "]".repeat(depth));
    check_rules(&registry, "python", &source);
}

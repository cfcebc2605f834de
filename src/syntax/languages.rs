//! Language identification
//!
//! Maps protocol language ids to tree-sitter grammars and the highlight queries
//! their color tables are derived from.

use tree_sitter::Language;

// Embedded query files for grammars whose crates don't ship a usable one
const YAML_HIGHLIGHTS: &str = include_str!("../../queries/yaml/highlights.scm");
const JSON_HIGHLIGHTS: &str = include_str!("../../queries/json/highlights.scm");
const CSHARP_HIGHLIGHTS: &str = include_str!("../../queries/csharp/highlights.scm");
const ELM_HIGHLIGHTS: &str = include_str!("../../queries/elm/highlights.scm");
const HCL_HIGHLIGHTS: &str = include_str!("../../queries/hcl/highlights.scm");
const LUA_HIGHLIGHTS: &str = include_str!("../../queries/lua/highlights.scm");
const OCAML_HIGHLIGHTS: &str = include_str!("../../queries/ocaml/highlights.scm");
const RUBY_HIGHLIGHTS: &str = include_str!("../../queries/ruby/highlights.scm");
const SCALA_HIGHLIGHTS: &str = include_str!("../../queries/scala/highlights.scm");

// Queries bundled with the grammar crates (some use HIGHLIGHT_QUERY singular)
const BASH_HIGHLIGHTS: &str = tree_sitter_bash::HIGHLIGHT_QUERY;
const C_HIGHLIGHTS: &str = tree_sitter_c::HIGHLIGHT_QUERY;
const CPP_HIGHLIGHTS: &str = tree_sitter_cpp::HIGHLIGHT_QUERY;
const CSS_HIGHLIGHTS: &str = tree_sitter_css::HIGHLIGHTS_QUERY;
const GO_HIGHLIGHTS: &str = tree_sitter_go::HIGHLIGHTS_QUERY;
const HTML_HIGHLIGHTS: &str = tree_sitter_html::HIGHLIGHTS_QUERY;
const JAVA_HIGHLIGHTS: &str = tree_sitter_java::HIGHLIGHTS_QUERY;
const JAVASCRIPT_HIGHLIGHTS: &str = tree_sitter_javascript::HIGHLIGHT_QUERY;
const PHP_HIGHLIGHTS: &str = tree_sitter_php::HIGHLIGHTS_QUERY;
const PYTHON_HIGHLIGHTS: &str = tree_sitter_python::HIGHLIGHTS_QUERY;
const RUST_HIGHLIGHTS: &str = tree_sitter_rust::HIGHLIGHTS_QUERY;
const TOML_HIGHLIGHTS: &str = tree_sitter_toml_ng::HIGHLIGHTS_QUERY;
const TYPESCRIPT_HIGHLIGHTS: &str = tree_sitter_typescript::HIGHLIGHTS_QUERY;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Bash,
    C,
    Cpp,
    CSharp,
    Css,
    Elm,
    Go,
    Hcl,
    Html,
    Java,
    JavaScript,
    Json,
    Lua,
    OCaml,
    Php,
    Python,
    Ruby,
    Rust,
    Scala,
    Toml,
    Tsx,
    TypeScript,
    Yaml,
}

impl LanguageId {
    pub const ALL: [LanguageId; 23] = [
        LanguageId::Bash,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Css,
        LanguageId::Elm,
        LanguageId::Go,
        LanguageId::Hcl,
        LanguageId::Html,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::Json,
        LanguageId::Lua,
        LanguageId::OCaml,
        LanguageId::Php,
        LanguageId::Python,
        LanguageId::Ruby,
        LanguageId::Rust,
        LanguageId::Scala,
        LanguageId::Toml,
        LanguageId::Tsx,
        LanguageId::TypeScript,
        LanguageId::Yaml,
    ];

    /// Resolve a protocol language id (`"rust"`, `"tsx"`, ...)
    ///
    /// Ids are matched exactly; clients send the names they were configured
    /// with, so there is no case folding or alias table.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// The id used on the wire and in the config file
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Bash => "bash",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::CSharp => "csharp",
            LanguageId::Css => "css",
            LanguageId::Elm => "elm",
            LanguageId::Go => "go",
            LanguageId::Hcl => "hcl",
            LanguageId::Html => "html",
            LanguageId::Java => "java",
            LanguageId::JavaScript => "javascript",
            LanguageId::Json => "json",
            LanguageId::Lua => "lua",
            LanguageId::OCaml => "ocaml",
            LanguageId::Php => "php",
            LanguageId::Python => "python",
            LanguageId::Ruby => "ruby",
            LanguageId::Rust => "rust",
            LanguageId::Scala => "scala",
            LanguageId::Toml => "toml",
            LanguageId::Tsx => "tsx",
            LanguageId::TypeScript => "typescript",
            LanguageId::Yaml => "yaml",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Bash => "Bash",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::CSharp => "C#",
            LanguageId::Css => "CSS",
            LanguageId::Elm => "Elm",
            LanguageId::Go => "Go",
            LanguageId::Hcl => "HCL",
            LanguageId::Html => "HTML",
            LanguageId::Java => "Java",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Json => "JSON",
            LanguageId::Lua => "Lua",
            LanguageId::OCaml => "OCaml",
            LanguageId::Php => "PHP",
            LanguageId::Python => "Python",
            LanguageId::Ruby => "Ruby",
            LanguageId::Rust => "Rust",
            LanguageId::Scala => "Scala",
            LanguageId::Toml => "TOML",
            LanguageId::Tsx => "TSX",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Yaml => "YAML",
        }
    }

    /// The tree-sitter grammar for this language
    pub fn grammar(&self) -> Language {
        match self {
            LanguageId::Bash => tree_sitter_bash::LANGUAGE.into(),
            LanguageId::C => tree_sitter_c::LANGUAGE.into(),
            LanguageId::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            LanguageId::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            LanguageId::Css => tree_sitter_css::LANGUAGE.into(),
            LanguageId::Elm => tree_sitter_elm::LANGUAGE.into(),
            LanguageId::Go => tree_sitter_go::LANGUAGE.into(),
            LanguageId::Hcl => tree_sitter_hcl::LANGUAGE.into(),
            LanguageId::Html => tree_sitter_html::LANGUAGE.into(),
            LanguageId::Java => tree_sitter_java::LANGUAGE.into(),
            LanguageId::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            LanguageId::Json => tree_sitter_json::LANGUAGE.into(),
            LanguageId::Lua => tree_sitter_lua::LANGUAGE.into(),
            LanguageId::OCaml => tree_sitter_ocaml::LANGUAGE_OCAML.into(),
            LanguageId::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            LanguageId::Python => tree_sitter_python::LANGUAGE.into(),
            LanguageId::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
            LanguageId::Scala => tree_sitter_scala::LANGUAGE.into(),
            LanguageId::Toml => tree_sitter_toml_ng::LANGUAGE.into(),
            LanguageId::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            LanguageId::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            LanguageId::Yaml => tree_sitter_yaml::language(),
        }
    }

    /// Highlight queries to build the color table from, base layer first.
    ///
    /// C++ only covers C++-specific constructs and builds on the C query;
    /// TypeScript and TSX build on JavaScript the same way.
    pub fn highlight_queries(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Bash => &[BASH_HIGHLIGHTS],
            LanguageId::C => &[C_HIGHLIGHTS],
            LanguageId::Cpp => &[C_HIGHLIGHTS, CPP_HIGHLIGHTS],
            LanguageId::CSharp => &[CSHARP_HIGHLIGHTS],
            LanguageId::Css => &[CSS_HIGHLIGHTS],
            LanguageId::Elm => &[ELM_HIGHLIGHTS],
            LanguageId::Go => &[GO_HIGHLIGHTS],
            LanguageId::Hcl => &[HCL_HIGHLIGHTS],
            LanguageId::Html => &[HTML_HIGHLIGHTS],
            LanguageId::Java => &[JAVA_HIGHLIGHTS],
            LanguageId::JavaScript => &[JAVASCRIPT_HIGHLIGHTS],
            LanguageId::Json => &[JSON_HIGHLIGHTS],
            LanguageId::Lua => &[LUA_HIGHLIGHTS],
            LanguageId::OCaml => &[OCAML_HIGHLIGHTS],
            LanguageId::Php => &[PHP_HIGHLIGHTS],
            LanguageId::Python => &[PYTHON_HIGHLIGHTS],
            LanguageId::Ruby => &[RUBY_HIGHLIGHTS],
            LanguageId::Rust => &[RUST_HIGHLIGHTS],
            LanguageId::Scala => &[SCALA_HIGHLIGHTS],
            LanguageId::Toml => &[TOML_HIGHLIGHTS],
            LanguageId::Tsx | LanguageId::TypeScript => {
                &[JAVASCRIPT_HIGHLIGHTS, TYPESCRIPT_HIGHLIGHTS]
            }
            LanguageId::Yaml => &[YAML_HIGHLIGHTS],
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

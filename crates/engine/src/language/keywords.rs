// crates/engine/src/language/keywords.rs
//! 言語ごとの予約語テーブル (大文字小文字を区別する)

pub const C: &[&str] = &[
    "_align", "asm", "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "entry", "extern", "float", "for", "fortran", "globaldef",
    "globalref", "globalvalue", "goto", "if", "int", "long", "noshare", "readonly", "register",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while",
];

pub const CPP: &[&str] = &[
    "_align", "asm", "auto", "break", "case", "catch", "char", "class", "const", "continue",
    "default", "delete", "do", "double", "else", "enum", "extern", "float", "for", "friend",
    "goto", "if", "inline", "int", "long", "new", "operator", "private", "protected", "public",
    "register", "return", "short", "signed", "sizeof", "static", "struct", "switch", "template",
    "this", "throw", "try", "typedef", "union", "unsigned", "virtual", "void", "volatile",
    "while",
];

pub const TRELLIS: &[&str] = &[
    // operators
    "and", "cand", "cor", "div", "eqv", "in", "mod", "or", "xor", "not",
    // declarations
    "allocate", "as", "bind", "builtin", "component", "define", "exclude", "field", "from", "get",
    "inherit", "is", "operation", "put", "type_module", "var",
    // modifiers
    "abstract", "allocate_visible", "base", "constant", "get_only", "mutable", "no_subtypes",
    "override", "private", "public", "put_only", "returns", "signals", "subtype_of",
    "subtype_visible", "yields",
    // statements
    "begin", "case", "continue", "do", "else", "elseif", "end", "except", "exit", "for", "if",
    "leave", "loop", "on", "otherwise", "resignal", "return", "signal", "subtype", "then", "to",
    "type_case", "unless", "when", "with", "yield",
];

pub const VERILOG: &[&str] = &[
    "always", "and", "assign", "begin", "buf", "bufif0", "bufif1", "case", "casex", "casez",
    "cmos", "deassign", "default", "defparam", "disable", "edge", "else", "end", "endcase",
    "endmodule", "endfunction", "endprimitive", "endspecify", "endtable", "endtask", "event",
    "for", "force", "forever", "fork", "function", "highz0", "highz1", "if", "ifnone", "initial",
    "inout", "input", "integer", "join", "large", "macromodule", "medium", "module", "nand",
    "negedge", "nmos", "nor", "not", "notif0", "notif1", "or", "output", "parameter", "pmos",
    "posedge", "primitive", "pull0", "pull1", "pulldown", "rcmos", "real", "realtime", "reg",
    "release", "repeat", "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1", "scalared", "small",
    "specify", "specparam", "strong0", "strong1", "supply0", "supply1", "table", "task", "time",
    "tran", "tranif0", "tranif1", "tri", "tri0", "tri1", "triand", "trior", "trireg", "vectored",
    "wait", "weak0", "weak1", "while", "wire", "wor", "xnor", "xor",
];

pub const VERA: &[&str] = &[
    "all", "any", "begin", "bind", "bind_var", "bit", "break", "breakpoint", "case", "class",
    "continue", "coverage_block", "default", "depth", "else", "end", "enum", "event", "extern",
    "extends", "for", "fork", "function", "if", "inout", "input", "integer", "interface", "join",
    "local", "negedge", "new", "none", "null", "output", "port", "posedge", "program", "reg",
    "repeat", "return", "shadow", "soft", "state", "static", "super", "task", "terminate", "this",
    "trans", "typedef", "var", "vector", "verilog_node", "verilog_task", "void", "while", "with",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_no_duplicates() {
        for table in [C, CPP, TRELLIS, VERILOG, VERA] {
            let unique: hashbrown::HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len());
        }
    }
}

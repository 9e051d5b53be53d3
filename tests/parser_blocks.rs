//! Parser tests, one construct per test
//!
//! Documents are parsed from inline sources and checked with the fluent assertions of
//! `leandoc::testing`.

use leandoc::leandoc::ast::{AstNode, Inline, Node};
use leandoc::leandoc::parsing::parse_document;
use leandoc::leandoc::testing::assert_doc;
use leandoc::leandoc::token::RoleKind;

// ============================================================================
// Blocks with children
// ============================================================================

#[test]
fn test_simple_block_with_params_and_role() {
    let doc = parse_document("::: note (x := \"1\")\nHello {name}`World`\n:::");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_simple_block()
            .block_kind("note")
            .param("x", "1")
            .param_count(1)
            .child_count(1)
            .child(0, |c| {
                c.assert_paragraph().inlines(&[
                    Inline::text("Hello "),
                    Inline::role(RoleKind::Name, "{name}`World`"),
                ]);
            });
    });
}

#[test]
fn test_unterminated_block_closes_at_end_of_input() {
    let doc = parse_document("::: warning\nFirst.\n\n# Inside\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_simple_block()
            .block_kind("warning")
            .title("")
            .child_count(2)
            .child(0, |c| {
                c.assert_paragraph().text("First.");
            })
            .child(1, |c| {
                c.assert_header().level(1).text("Inside");
            });
    });
}

#[test]
fn test_block_title_before_and_after_clause() {
    let doc = parse_document(
        "::: syntax term (title := \"Literals\")\n:::\n::: example (name := \"ex\") \"Shown\"\n:::\n",
    );

    assert_doc(&doc)
        .node_count(2)
        .node(0, |n| {
            n.assert_simple_block()
                .block_kind("syntax")
                .title("term")
                .param("title", "Literals");
        })
        .node(1, |n| {
            n.assert_simple_block()
                .block_kind("example")
                .title("Shown")
                .param("name", "ex")
                .child_count(0);
        });
}

#[test]
fn test_malformed_clause_becomes_title() {
    let doc = parse_document("::: note (oops)\n:::\n::: note (x := 1\n:::\n");

    assert_doc(&doc)
        .node(0, |n| {
            n.assert_simple_block().title("(oops)").param_count(0);
        })
        .node(1, |n| {
            n.assert_simple_block().title("(x := 1").param_count(0);
        });
}

#[test]
fn test_nested_blocks_in_container() {
    let doc = parse_document(":::: keepEnv\n::: note\ninner\n:::\nouter\n::::\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_container()
            .title(None)
            .directives(&["keepEnv"])
            .child_count(2)
            .child(0, |c| {
                c.assert_simple_block().block_kind("note").child(0, |p| {
                    p.assert_paragraph().text("inner");
                });
            })
            .child(1, |c| {
                c.assert_paragraph().text("outer");
            });
    });
}

#[test]
fn test_container_header_precedence() {
    let doc = parse_document(
        ":::: Example \"Case\"\n::::\n:::: hideProofs \"Title\" resetEnv\n::::\n:::: autoImplicit\n::::\n",
    );

    assert_doc(&doc)
        .node_count(3)
        .node(0, |n| {
            n.assert_container().title(Some("Case")).directives(&[]);
        })
        .node(1, |n| {
            n.assert_container()
                .title(Some("Title"))
                .directives(&["hideProofs", "resetEnv"]);
        })
        .node(2, |n| {
            n.assert_container().title(None).directives(&["autoImplicit"]);
        });
}

#[test]
fn test_show_assignment_is_a_leaf() {
    let doc = parse_document("::: example show := x\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_type("DefinitionBlock").is_translatable(false);
    });
    match &doc.children[0] {
        Node::DefinitionBlock(block) => assert_eq!(block.raw_content, "::: example show := x"),
        other => panic!("expected DefinitionBlock, found {:?}", other),
    }
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn test_stray_closers_between_paragraphs() {
    let doc = parse_document("Before\n::::\n:::\nAfter\n");

    assert_doc(&doc)
        .node_count(2)
        .node(0, |n| {
            n.assert_paragraph().text("Before");
        })
        .node(1, |n| {
            n.assert_paragraph().text("After");
        });
}

#[test]
fn test_container_end_inside_simple_block_is_dropped() {
    let doc = parse_document("::: note\na\n::::\nb\n:::\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_simple_block().child_count(2);
    });
}

#[test]
fn test_unterminated_code_fence() {
    let doc = parse_document("```lean\nx\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.assert_code_block().language("lean").body("x");
    });
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_code_block_params() {
    let doc = parse_document("```lean (name := \"ex1\", keep := true)\nbody\n```");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.is_translatable(false)
            .assert_code_block()
            .language("lean")
            .param("name", "ex1")
            .param("keep", "true")
            .param_count(2)
            .body("body");
    });
}

#[test]
fn test_code_block_body_is_verbatim() {
    let source = "```lean\n  theorem t : True := by\n    trivial\n```\n";
    let doc = parse_document(source);

    assert_doc(&doc).node(0, |n| {
        n.assert_code_block()
            .param_count(0)
            .body("theorem t : True := by\n    trivial");
    });
}

#[test]
fn test_header_levels() {
    let doc = parse_document("# One\n### Three  \n");

    assert_doc(&doc)
        .node_count(2)
        .node(0, |n| {
            n.is_translatable(true).assert_header().level(1).text("One");
        })
        .node(1, |n| {
            n.assert_header().level(3).text("Three");
        });
}

#[test]
fn test_small_leaves() {
    let source = "import Mathlib\n\n{include 0 Intro}\n\n{docstring List.map}\n\n%%%\ntitle: \"x\"\n%%%\n";
    let doc = parse_document(source);

    assert_doc(&doc).node_types(&[
        "CodeLine",
        "IncludeDirective",
        "DocstringPlaceholder",
        "MetadataBlock",
    ]);
    assert!(doc.iter().all(|n| !n.is_translatable()));
    match &doc.children[3] {
        Node::MetadataBlock(meta) => assert_eq!(meta.raw_body, "title: \"x\""),
        other => panic!("expected MetadataBlock, found {:?}", other),
    }
}

#[test]
fn test_doc_comment_and_directive() {
    let doc = parse_document("/- Adds one.\n-/\n#doc (Manual) \"Arrays\" =>\n#doc (Manual) =>\n");

    assert_doc(&doc).node_types(&["DocComment", "DocDirective", "DocDirective"]);
    match (&doc.children[0], &doc.children[1], &doc.children[2]) {
        (Node::DocComment(comment), Node::DocDirective(quoted), Node::DocDirective(bare)) => {
            assert_eq!(comment.text(), "Adds one.");
            assert_eq!(quoted.text(), "Arrays");
            assert_eq!(bare.text(), "");
            assert_eq!(bare.raw_line, "#doc (Manual) =>");
        }
        other => panic!("unexpected nodes {:?}", other),
    }
}

#[test]
fn test_each_role_kind_at_block_position() {
    let cases = [
        ("{lean}`Nat`", RoleKind::Lean),
        ("{name}`Array.push`", RoleKind::Name),
        ("{keyword}`fun`", RoleKind::Keyword),
        ("{tactic}`simp`", RoleKind::Tactic),
        ("{option}`pp.all`", RoleKind::Option),
        ("{ref \"sec\"}[Section]", RoleKind::Ref),
        ("{deftech}_linear_", RoleKind::Tech),
    ];
    for (source, role) in cases {
        let doc = parse_document(source);
        assert_doc(&doc).node_count(1).node(0, |n| {
            n.assert_inline_role(role, source);
        });
    }
}

#[test]
fn test_role_at_block_position() {
    let doc = parse_document("{TODO}[fix] trailing\n");

    assert_doc(&doc)
        .node_count(2)
        .node(0, |n| {
            n.is_translatable(false)
                .assert_inline_role(RoleKind::Todo, "{TODO}[fix]");
        })
        .node(1, |n| {
            n.assert_paragraph().text(" trailing");
        });
}

// ============================================================================
// Running prose
// ============================================================================

#[test]
fn test_soft_break_stays_in_paragraph() {
    let doc = parse_document("line one\nline two\n\nnext\n```lean\nx\n```\n");

    assert_doc(&doc)
        .node_types(&["Paragraph", "Paragraph", "CodeBlock"])
        .node(0, |n| {
            n.assert_paragraph().text("line one\nline two").inline_count(1);
        })
        .node(1, |n| {
            n.assert_paragraph().text("next");
        });
}

#[test]
fn test_definition_description_is_retokenized() {
    let doc = parse_document(": size\n  Has {lean}`Nat` count.\n\n");

    assert_doc(&doc).node_count(1).node(0, |n| {
        n.is_translatable(true)
            .assert_definition_list()
            .definition_count(1)
            .term_at(0, "size")
            .description(
                0,
                &[
                    Inline::text("Has "),
                    Inline::role(RoleKind::Lean, "{lean}`Nat`"),
                    Inline::text(" count."),
                ],
            );
    });
}

#[test]
fn test_blank_line_ends_definition_list() {
    let doc = parse_document(": a\n  one\n\n: b  \n  two\n  more\n# After\n");

    assert_doc(&doc)
        .node_types(&["DefinitionList", "DefinitionList", "Header"])
        .node(0, |n| {
            n.assert_definition_list()
                .definition_count(1)
                .term_at(0, "a")
                .description_text(0, "one");
        })
        .node(1, |n| {
            n.assert_definition_list()
                .definition_count(1)
                .term_at(0, "b")
                .description_text(0, "two\n  more");
        });
}

#[test]
fn test_adjacent_terms_share_a_list() {
    let doc = parse_document(": a\n  one\n: b\n  two\n");

    assert_doc(&doc)
        .node_types(&["DefinitionList"])
        .node(0, |n| {
            n.assert_definition_list()
                .definition_count(2)
                .term_at(0, "a")
                .term_at(1, "b")
                .description_text(1, "two");
        });
}

#[test]
fn test_tree_serializes_with_type_tags() {
    let doc = parse_document("::: note (x := \"1\")\nHello {name}`World`\n:::");
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value[0]["type"], "SimpleBlock");
    assert_eq!(value[0]["block_kind"], "note");
    assert_eq!(value[0]["params"]["x"], "1");
    let paragraph = &value[0]["children"][0];
    assert_eq!(paragraph["type"], "Paragraph");
    assert_eq!(paragraph["children"][0]["type"], "Text");
    assert_eq!(paragraph["children"][1]["type"], "InlineRole");
    assert_eq!(paragraph["children"][1]["role_kind"], "name");
    assert_eq!(paragraph["children"][1]["translatable"], false);
}

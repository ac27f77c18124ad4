use linescript::{run_with_output, ScriptModule};

fn run_capture(src: &str) -> Result<String, linescript::ScriptError> {
    let mut out = Vec::new();
    run_with_output(src, &mut out)?;
    Ok(String::from_utf8(out).expect("script output was not UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match run_capture(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run_capture(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_capture(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print(2 + 3 * 4)", "14\n");
    assert_output("print((2 + 3) * 4)", "20\n");
    assert_output("print (\"5 * 2 / 10 = \" + (5 * 2 / 10))", "5 * 2 / 10 = 1\n");
    assert_output("print(7 / 2)", "3.5\n");
    assert_output("print(7 % 3)", "1\n");
    assert_output("print(10 - 2 - 3)", "5\n");
}

#[test]
fn exponentiation_groups_to_the_left() {
    assert_output("print(\"5^2 = \" + 5^2)", "5^2 = 25\n");
    assert_output("print(2^3^2)", "64\n");
}

#[test]
fn unary_operators() {
    assert_output("print(-(2 + 3))", "-5\n");
    assert_output("print(- 5 + 10)", "5\n");
    assert_output("print(!0)", "1\n");
    assert_output("print(!7)", "0\n");
    assert_output("print(2 * -3)", "-6\n");
}

#[test]
fn numeric_equality_uses_tolerance() {
    assert_output("print(1 == 1)", "1\n");
    assert_output("print(0.00005 == 0)", "1\n");
    assert_output("print(0.001 == 0)", "0\n");
    assert_output("print(1 != 1.1)", "1\n");
    assert_output("print(2 < 3)", "1\n");
    assert_output("print(2 >= 3)", "0\n");
}

#[test]
fn logical_operators_on_numbers() {
    assert_output("print(1 && 2)", "1\n");
    assert_output("print(1 && 0)", "0\n");
    assert_output("print(0 || 3)", "1\n");
    assert_output("print(0 || 0)", "0\n");
}

#[test]
fn bitwise_and_shift_operators() {
    assert_output("print(6 & 3)", "2\n");
    assert_output("print(6 | 3)", "7\n");
    assert_output("print(1 << 4)", "16\n");
    assert_output("print(9 >> 1)", "4\n");
}

#[test]
fn string_concatenation() {
    assert_output("print(\"1\" + \"2\")", "12\n");
    assert_output("print(\"n = \" + 4)", "n = 4\n");
    assert_output("print(4 + \" = n\")", "4 = n\n");
}

#[test]
fn sqrt_applies_prefix_or_with_parens() {
    assert_output("print(\"sqrt 7 = \" + (sqrt 7))", "sqrt 7 = 2.645751\n");
    assert_output("print(sqrt 16)", "4\n");
    assert_output("print(sqrt(16))", "4\n");
}

#[test]
fn assignment_round_trip_preserves_kind() {
    assert_output("x = 5\nprint x", "5\n");
    assert_output("x = 5\nx = \"five\"\nprint x", "five\n");
    assert_output("name = \"total\"\nprint (name + \": \" + 3)", "total: 3\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_output("y = (x = 3) + 1\nprint y\nprint x", "4\n3\n");
    assert_output("x = print \"hi\"\nprint x", "hi\n1\n");
}

#[test]
fn unresolved_symbols_read_as_strings() {
    assert_output("print greetings", "greetings\n");
    assert_output("condition = true\nprint condition", "true\n");
    // A quoted string never resolves as a variable.
    assert_output("x = 5\nprint \"x\"", "x\n");
}

#[test]
fn while_loop_counts() {
    assert_output("i = 0\nwhile (i < 3)\nprint i\ni = i + 1\nend", "0\n1\n2\n");
}

#[test]
fn while_loop_skipped_when_false() {
    assert_output("while (0)\nprint \"X\"\nend\nprint \"done\"", "done\n");
}

#[test]
fn while_loops_nest() {
    let src = "total = 0\n\
               i = 0\n\
               while (i < 3)\n\
               j = 0\n\
               while (j < 2)\n\
               total = total + 1\n\
               j = j + 1\n\
               end\n\
               i = i + 1\n\
               end\n\
               print total";
    assert_output(src, "6\n");
}

#[test]
fn if_takes_the_true_branch() {
    assert_output("x = 1\nif (x == 1)\nprint \"A\"\nelse\nprint \"B\"\nend", "A\n");
    assert_output("x = 2\nif (x == 1)\nprint \"A\"\nelse\nprint \"B\"\nend", "B\n");
}

#[test]
fn elseif_chain_picks_first_true_condition() {
    assert_output("if (1)\nprint \"A\"\nelseif (1)\nprint \"B\"\nend", "A\n");
    assert_output("if (0)\nprint \"A\"\nelseif (1)\nprint \"B\"\nend", "B\n");
    assert_output("if (0)\nprint \"A\"\nelseif (0)\nprint \"B\"\nelse\nprint \"C\"\nend",
                  "C\n");
}

#[test]
fn blocks_nest_inside_branches() {
    let src = "x = 1\n\
               if (x == 1)\n\
               if (2 > 1)\n\
               print \"inner\"\n\
               end\n\
               end";
    assert_output(src, "inner\n");
}

#[test]
fn blank_lines_are_skipped() {
    assert_output("\nx = 2\n\n\nprint x\n\n", "2\n");
    assert_success("");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("x = 1 / 0");
    assert_failure("x = 1 % 0");
}

#[test]
fn string_conditions_are_runtime_errors() {
    // `true` and `false` are not keywords; both variables hold strings, so
    // the logical operators reject them when the condition evaluates.
    let src = "condition = true\n\
               condition2 = false\n\
               if (condition && !condition2)\n\
               print \"A\"\n\
               else\n\
               print \"B\"\n\
               end";
    assert_failure(src);
    assert_failure("if (hello)\nend");
}

#[test]
fn operator_misuse_is_an_error() {
    assert_failure("\"x\" = 5");
    assert_failure("x = \"a\" - \"b\"");
    assert_failure("print(1 +* 2)");
    assert_failure("x = 5 $ 3");
}

#[test]
fn malformed_lines_are_errors() {
    assert_failure("print (\"unclosed");
    assert_failure("print (1))");
    assert_failure("print ((1)");
    assert_failure("1 2 3");
}

#[test]
fn unclosed_blocks_report_the_opener() {
    let error = ScriptModule::compile("if (1)").expect_err("compile should fail");
    let message = error.to_string();
    assert!(message.contains("line 1"), "unexpected diagnostic: {message}");
    assert!(message.contains("missing an 'end' specifier"),
            "unexpected diagnostic: {message}");
}

#[test]
fn misplaced_block_markers_are_compile_errors() {
    assert_failure("else");
    assert_failure("end");
    assert_failure("x = 1\nelseif (1)\nend");
}

#[test]
fn interactive_lines_share_an_environment() {
    let mut module = ScriptModule::interactive();
    module.eval_interactive("x = 6").expect("assignment should evaluate");
    let result = module.eval_interactive("x * 7").expect("expression should evaluate");
    assert_eq!(result.render(), "42");

    let result = module.eval_interactive("\"x is \" + x").expect("expression should evaluate");
    assert_eq!(result.render(), "x is 6");
}

#[test]
fn interactive_mode_rejects_blocks() {
    let mut module = ScriptModule::interactive();
    let error = module.eval_interactive("if (1)").expect_err("blocks should be rejected");
    assert!(error.message().contains("interactive"),
            "unexpected message: {}",
            error.message());
    assert!(module.eval_interactive("while (1)").is_err());
    assert!(module.eval_interactive("end").is_err());
}

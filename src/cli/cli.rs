use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let color_arg_help = "Colors are given as six hexadecimal digits, with or without a \
                          leading '#', such as '#8A9A5B' or 8a9a5b.";

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(color_print::cstr!(
            "Check color pairs against the WCAG contrast requirements and suggest \
             accessible alternatives for foreground colors that fall short.\n\n\
             <green,bold>Examples:</>\
             \n  <cyan,bold>wcag-contrast --foreground '#8A9A5B' --background '#FAFAF5'</>\
             \n  <cyan,bold>wcag-contrast -c '#8A9A5B,#E6C2BF' -b '#FAFAF5'</>"
        ))
        .color(clap::ColorChoice::Auto)
        .dont_collapse_args_in_usage(true)
        .max_term_width(100)
        .arg(
            Arg::new("background")
                .long("background")
                .short('b')
                .value_name("COLOR")
                .help("Background color")
                .long_help(format!("Background color.\n\n{color_arg_help}"))
                .required(true),
        )
        .arg(
            Arg::new("foreground")
                .long("foreground")
                .short('f')
                .value_name("COLOR")
                .help("Foreground color to check against the background"),
        )
        .arg(
            Arg::new("colors")
                .long("colors")
                .short('c')
                .value_name("LIST")
                .help("Comma-separated list of foreground colors to check")
                .long_help(color_print::cstr!(
                    "Comma-separated list of foreground colors to check against the \
                     background. Colors that are spelled exactly like the background \
                     are skipped.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>-c '#8A9A5B, #E6C2BF, #FAFAF5'</>"
                )),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .short('t')
                .value_name("RATIO")
                .help("Contrast ratio that suggested alternatives have to reach")
                .value_parser(clap::value_parser!(f64))
                .default_value("4.5"),
        )
        .arg(
            Arg::new("color-mode")
                .long("color-mode")
                .short('m')
                .value_name("MODE")
                .help("Whether to use colors in the report")
                .long_help(
                    "Whether to use colors in the report. 'auto' enables them only if \
                     standard output is an interactive terminal.",
                )
                .value_parser(["auto", "always", "never"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Print diagnostics to stderr (repeat for more detail)"),
        )
}

// ABOUTME: Color classes and the display rules for status, ports and networks.
// ABOUTME: colorize() maps a class to a terminal color through the colored crate.

use crate::records::container_port;
use colored::Colorize;

/// Shown in place of an empty port list.
pub const NO_PORTS: &str = "No Ports";

/// Shown in place of an empty network list.
pub const NO_NETWORK: &str = "No Network";

/// Semantic color of a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Cyan.
    Info,
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Magenta.
    Emphasis,
    /// Red.
    Error,
    /// Blue.
    Link,
}

/// Wrap `text` in the terminal color for `class`.
///
/// Whether escape codes are emitted follows `colored`'s own detection
/// (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a terminal).
pub fn colorize(text: &str, class: ColorClass) -> String {
    let styled = match class {
        ColorClass::Info => text.cyan(),
        ColorClass::Success => text.green(),
        ColorClass::Warning => text.yellow(),
        ColorClass::Emphasis => text.magenta(),
        ColorClass::Error => text.red(),
        ColorClass::Link => text.blue(),
    };
    styled.to_string()
}

/// Exited containers are shown as errors, everything else as success.
pub fn status_class(status: &str) -> ColorClass {
    if status.to_lowercase().contains("exited") {
        ColorClass::Error
    } else {
        ColorClass::Success
    }
}

/// The network list, or [`NO_NETWORK`] when it is empty.
pub fn network_text(networks: &str) -> &str {
    if networks.is_empty() {
        NO_NETWORK
    } else {
        networks
    }
}

/// One displayed piece of a port list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortFragment {
    pub text: String,
    pub class: ColorClass,
}

impl PortFragment {
    /// The fragment in its color.
    pub fn colored(&self) -> String {
        colorize(&self.text, self.class)
    }

    /// The last word of the fragment, as shown in the compact layout.
    pub fn compact_token(&self) -> &str {
        self.text.rsplit(' ').next().unwrap_or(&self.text)
    }
}

/// Split a normalized port list into displayed fragments.
///
/// Published ports (`80->8080`) show only the host port, colored as errors.
/// Exposed ports show the container port without its protocol, colored as
/// success. An empty list yields a single [`NO_PORTS`] fragment.
pub fn port_fragments(ports: &str) -> Vec<PortFragment> {
    if ports.is_empty() {
        return vec![PortFragment {
            text: NO_PORTS.to_string(),
            class: ColorClass::Success,
        }];
    }

    ports
        .split(", ")
        .map(|fragment| match fragment.split_once("->") {
            Some((_, host_port)) => PortFragment {
                text: host_port.to_string(),
                class: ColorClass::Error,
            },
            None => PortFragment {
                text: container_port(fragment).to_string(),
                class: ColorClass::Success,
            },
        })
        .collect()
}

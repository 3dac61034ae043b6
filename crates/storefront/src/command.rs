//! Typed UI commands.
//!
//! Every user action the storefront reacts to is a [`Command`]. Commands
//! serialize as tagged objects (`{"type": "add_to_cart", "product_id": 2}`) for
//! replay scripts, and parse from a short text form for interactive use:
//!
//! | text | command |
//! |---|---|
//! | `fav 3` | `ToggleFavorite` |
//! | `add 2` | `AddToCart` |
//! | `inc 2` / `dec 2` | `UpdateQuantity` with delta `+1` / `-1` |
//! | `qty 2 -3` | `UpdateQuantity` with an explicit delta |
//! | `rm 2` | `RemoveFromCart` |
//! | `clear` | `ClearCart` |
//! | `filter on` / `filter off` | `SetFavoritesOnly` |

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use shop_cart_core::ProductId;
use thiserror::Error;

/// An inbound UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Star or unstar a product.
    ToggleFavorite { product_id: ProductId },
    /// Put one unit of a product in the cart.
    AddToCart { product_id: ProductId },
    /// Change a cart line's quantity by `delta`.
    UpdateQuantity { product_id: ProductId, delta: i64 },
    /// Drop a cart line.
    RemoveFromCart { product_id: ProductId },
    /// Empty the cart.
    ClearCart,
    /// Show only favorited products, or everything.
    SetFavoritesOnly { enabled: bool },
}

/// Errors from parsing the text form of a [`Command`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    #[error("{verb}: expected {expected}")]
    MissingArgument {
        verb: &'static str,
        expected: &'static str,
    },
    #[error("{verb}: invalid {what} '{value}'")]
    InvalidArgument {
        verb: &'static str,
        what: &'static str,
        value: String,
    },
    #[error("{0}: too many arguments")]
    TrailingArguments(&'static str),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleFavorite { product_id } => write!(f, "fav {product_id}"),
            Self::AddToCart { product_id } => write!(f, "add {product_id}"),
            Self::UpdateQuantity { product_id, delta } => write!(f, "qty {product_id} {delta}"),
            Self::RemoveFromCart { product_id } => write!(f, "rm {product_id}"),
            Self::ClearCart => write!(f, "clear"),
            Self::SetFavoritesOnly { enabled } => {
                write!(f, "filter {}", if *enabled { "on" } else { "off" })
            }
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "fav" | "favorite" | "toggle" => Self::ToggleFavorite {
                product_id: product_arg("fav", words.next())?,
            },
            "add" => Self::AddToCart {
                product_id: product_arg("add", words.next())?,
            },
            "inc" | "+" => Self::UpdateQuantity {
                product_id: product_arg("inc", words.next())?,
                delta: 1,
            },
            "dec" | "-" => Self::UpdateQuantity {
                product_id: product_arg("dec", words.next())?,
                delta: -1,
            },
            "qty" => {
                let product_id = product_arg("qty", words.next())?;
                let raw = words.next().ok_or(ParseCommandError::MissingArgument {
                    verb: "qty",
                    expected: "a quantity delta",
                })?;
                let delta = raw
                    .parse::<i64>()
                    .map_err(|_| ParseCommandError::InvalidArgument {
                        verb: "qty",
                        what: "delta",
                        value: raw.to_owned(),
                    })?;
                Self::UpdateQuantity { product_id, delta }
            }
            "rm" | "remove" => Self::RemoveFromCart {
                product_id: product_arg("rm", words.next())?,
            },
            "clear" => Self::ClearCart,
            "filter" => {
                let raw = words.next().ok_or(ParseCommandError::MissingArgument {
                    verb: "filter",
                    expected: "on or off",
                })?;
                let enabled = match raw.to_ascii_lowercase().as_str() {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    _ => {
                        return Err(ParseCommandError::InvalidArgument {
                            verb: "filter",
                            what: "switch",
                            value: raw.to_owned(),
                        });
                    }
                };
                Self::SetFavoritesOnly { enabled }
            }
            _ => return Err(ParseCommandError::UnknownVerb(verb.to_owned())),
        };

        if words.next().is_some() {
            return Err(ParseCommandError::TrailingArguments(command.verb()));
        }
        Ok(command)
    }
}

impl Command {
    const fn verb(&self) -> &'static str {
        match self {
            Self::ToggleFavorite { .. } => "fav",
            Self::AddToCart { .. } => "add",
            Self::UpdateQuantity { .. } => "qty",
            Self::RemoveFromCart { .. } => "rm",
            Self::ClearCart => "clear",
            Self::SetFavoritesOnly { .. } => "filter",
        }
    }
}

fn product_arg(verb: &'static str, arg: Option<&str>) -> Result<ProductId, ParseCommandError> {
    let raw = arg.ok_or(ParseCommandError::MissingArgument {
        verb,
        expected: "a product id",
    })?;
    raw.parse().map_err(|_| ParseCommandError::InvalidArgument {
        verb,
        what: "product id",
        value: raw.to_owned(),
    })
}

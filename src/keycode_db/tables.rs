//! Windows virtual key code tables.
//!
//! Names are matched case-insensitively by [`super::KeyboardLayout`].
//! See <https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes>.

use super::KeyboardRegion;

/// A key code and every name it can be referred to by.
pub type KeyCodeEntry = (i32, &'static [&'static str]);

const VK_OEM_1: i32 = 0xBA;
const VK_OEM_2: i32 = 0xBF;
const VK_OEM_3: i32 = 0xC0;
const VK_OEM_4: i32 = 0xDB;
const VK_OEM_5: i32 = 0xDC;
const VK_OEM_6: i32 = 0xDD;
const VK_OEM_7: i32 = 0xDE;
const VK_OEM_8: i32 = 0xDF;
const VK_OEM_102: i32 = 0xE2;

/// Keys that share their code across all Latin Windows layouts.
pub const BASIC_KEY_CODES: &[KeyCodeEntry] = &[
    // Basic control keys
    (8, &["Backspace", "Back"]),
    (9, &["Tab"]),
    (12, &["Clear"]),
    (13, &["Enter", "Return"]),
    (19, &["Pause"]),
    (20, &["CapsLock", "Caps"]),
    (27, &["Esc", "Escape"]),
    (32, &["Space"]),
    // Home block and arrows
    (33, &["PageUp"]),
    (34, &["PageDown"]),
    (35, &["End"]),
    (36, &["Home"]),
    (37, &["Left", "ArrowLeft"]),
    (38, &["Up", "ArrowUp"]),
    (39, &["Right", "ArrowRight"]),
    (40, &["Down", "ArrowDown"]),
    (44, &["PrintScreen", "PrtScrn", "PrntScr"]),
    (45, &["Insert", "Ins"]),
    (46, &["Delete", "Del"]),
    (47, &["Help"]),
    // 0-9
    (48, &["0"]),
    (49, &["1"]),
    (50, &["2"]),
    (51, &["3"]),
    (52, &["4"]),
    (53, &["5"]),
    (54, &["6"]),
    (55, &["7"]),
    (56, &["8"]),
    (57, &["9"]),
    // A-Z
    (65, &["A"]),
    (66, &["B"]),
    (67, &["C"]),
    (68, &["D"]),
    (69, &["E"]),
    (70, &["F"]),
    (71, &["G"]),
    (72, &["H"]),
    (73, &["I"]),
    (74, &["J"]),
    (75, &["K"]),
    (76, &["L"]),
    (77, &["M"]),
    (78, &["N"]),
    (79, &["O"]),
    (80, &["P"]),
    (81, &["Q"]),
    (82, &["R"]),
    (83, &["S"]),
    (84, &["T"]),
    (85, &["U"]),
    (86, &["V"]),
    (87, &["W"]),
    (88, &["X"]),
    (89, &["Y"]),
    (90, &["Z"]),
    // Windows and context menu
    (91, &["LWin", "LeftWin", "LeftWindows"]),
    (92, &["RWin", "RightWin", "RightWindows"]),
    (93, &["Context", "ContextMenu", "Apps"]),
    // Numpad
    (96, &["NumPad0", "num0"]),
    (97, &["NumPad1", "num1"]),
    (98, &["NumPad2", "num2"]),
    (99, &["NumPad3", "num3"]),
    (100, &["NumPad4", "num4"]),
    (101, &["NumPad5", "num5"]),
    (102, &["NumPad6", "num6"]),
    (103, &["NumPad7", "num7"]),
    (104, &["NumPad8", "num8"]),
    (105, &["NumPad9", "num9"]),
    (106, &["NumPad*", "num*"]),
    (107, &["NumPad+", "num+"]),
    (108, &["NumPad,", "num,"]),
    (109, &["NumPad-", "num-"]),
    (110, &["NumPad.", "num."]),
    (111, &["NumPad/", "num/"]),
    // F1-F24
    (112, &["F1"]),
    (113, &["F2"]),
    (114, &["F3"]),
    (115, &["F4"]),
    (116, &["F5"]),
    (117, &["F6"]),
    (118, &["F7"]),
    (119, &["F8"]),
    (120, &["F9"]),
    (121, &["F10"]),
    (122, &["F11"]),
    (123, &["F12"]),
    (124, &["F13"]),
    (125, &["F14"]),
    (126, &["F15"]),
    (127, &["F16"]),
    (128, &["F17"]),
    (129, &["F18"]),
    (130, &["F19"]),
    (131, &["F20"]),
    (132, &["F21"]),
    (133, &["F22"]),
    (134, &["F23"]),
    (135, &["F24"]),
    // Locks and modifiers
    (144, &["Num", "NumLock"]),
    (145, &["Scroll", "ScrollLock"]),
    (160, &["LeftShift", "LShift"]),
    (161, &["RightShift", "RShift"]),
    (162, &["LeftCtrl", "LCtrl"]),
    (163, &["RightCtrl", "RCtrl"]),
    (164, &["LeftAlt", "LAlt"]),
    (165, &["RightAlt", "RAlt"]),
    // Punctuation shared by all layouts
    (187, &["Plus", "+"]),
    (188, &["Comma", ","]),
    (189, &["Minus", "-"]),
    (190, &["Period", "."]),
];

const SWISS_GERMAN: &[KeyCodeEntry] = &[
    (VK_OEM_1, &["ü"]),
    (VK_OEM_2, &["§"]),
    (VK_OEM_3, &["¨"]),
    (VK_OEM_4, &["'"]),
    (VK_OEM_5, &["ä"]),
    (VK_OEM_6, &["^"]),
    (VK_OEM_7, &["ö"]),
    (VK_OEM_8, &["$"]),
    (VK_OEM_102, &["<"]),
];

const GERMAN: &[KeyCodeEntry] = &[
    (VK_OEM_1, &["ü"]),
    (VK_OEM_2, &["#"]),
    (VK_OEM_3, &["ö"]),
    (VK_OEM_4, &["ß"]),
    (VK_OEM_5, &["^"]),
    (VK_OEM_6, &["´"]),
    (VK_OEM_7, &["ä"]),
    (VK_OEM_102, &["<"]),
];

const UK: &[KeyCodeEntry] = &[
    (VK_OEM_1, &[";"]),
    (VK_OEM_2, &["/"]),
    (VK_OEM_3, &["'"]),
    (VK_OEM_4, &["["]),
    (VK_OEM_5, &["\\"]),
    (VK_OEM_6, &["]"]),
    (VK_OEM_7, &["#"]),
    (VK_OEM_8, &["`"]),
    (VK_OEM_102, &["<"]),
];

const US: &[KeyCodeEntry] = &[
    (VK_OEM_1, &[";"]),
    (VK_OEM_2, &["/"]),
    (VK_OEM_3, &["`"]),
    (VK_OEM_4, &["["]),
    (VK_OEM_5, &["\\", "Right\\"]),
    (VK_OEM_6, &["]"]),
    (VK_OEM_7, &["'"]),
    // Most US boards have no physical key for this one
    (VK_OEM_102, &["Left\\"]),
];

const FRENCH: &[KeyCodeEntry] = &[
    (VK_OEM_1, &[";"]),
    (VK_OEM_2, &[":"]),
    (VK_OEM_3, &["@"]),
    (VK_OEM_4, &["/"]),
    (VK_OEM_5, &["*"]),
    (VK_OEM_6, &["^"]),
    (VK_OEM_7, &["'"]),
    (VK_OEM_102, &["<"]),
];

const DUTCH: &[KeyCodeEntry] = &[
    (VK_OEM_1, &["*"]),
    (VK_OEM_2, &["°"]),
    (VK_OEM_3, &["´"]),
    (VK_OEM_4, &["/"]),
    (VK_OEM_5, &["<"]),
    (VK_OEM_6, &["¨"]),
    (VK_OEM_7, &["@"]),
    (VK_OEM_102, &["]"]),
];

/// Region-specific OEM keys.
#[must_use]
pub const fn region_key_codes(region: KeyboardRegion) -> &'static [KeyCodeEntry] {
    match region {
        KeyboardRegion::SwissGerman => SWISS_GERMAN,
        KeyboardRegion::German => GERMAN,
        KeyboardRegion::Uk => UK,
        KeyboardRegion::Us => US,
        KeyboardRegion::French => FRENCH,
        KeyboardRegion::Dutch => DUTCH,
    }
}

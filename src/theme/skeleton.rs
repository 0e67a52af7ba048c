/// Built-in theme source written by `--init`: the Sage of Light palette with
/// its workbench colors, token rules and contrast checks.
pub const SKELETON_SOURCE: &str = r##"# sage-theme source
#
# Color values:
#   oklch(L, C, H)   L and C in percent (C of 0.4), H in degrees
#   #rgb #rgba #rrggbb #rrggbbaa
#   R,G,B            decimal, 0-255 each
#   transparent
#   group.key        reference to an earlier palette entry
#   { color = ..., alpha = percent }
#
# Lines starting with # are comments.

type = "light"
output = "themes/sage-of-light-color-theme.json"

[settings]
algorithm = "wcag21"
on_failure = "warn"

#-----------------------------------------------------------------------------
# Palette
#-----------------------------------------------------------------------------

[palette.ui]
fg = "oklch(30, 0, 0)"
bg0 = "oklch(100, 0, 0)"
bg1 = "oklch(95, 0, 0)"
border0 = "oklch(85, 0, 0)"
border1 = "oklch(60, 0, 0)"
tooltip = { bg = "oklch(98, 10, 100)", border = "oklch(75, 20, 100)" }
cursor = "oklch(50, 100, 0)"
shadow = "transparent"
link = "oklch(50, 100, 250)"
accent = "oklch(50, 100, 310)"
bracket1 = "oklch(50, 25, 0)"
bracket2 = "oklch(50, 25, 200)"
bracket3 = "oklch(50, 25, 310)"
error = "oklch(50, 100, 0)"

[palette.syntax]
default = "oklch(20, 0, 0)"
keyword = "oklch(20, 0, 0)"
punctuation = "oklch(54, 0, 0)"
string = "oklch(54, 100, 0)"
function = "oklch(54, 100, 250)"
comment = "oklch(54, 100, 140)"
property = "oklch(54, 100, 310)"
key = "oklch(54, 100, 50)"
type = "oklch(54, 100, 200)"

[palette.terminal]
black = "oklch(40, 0, 0)"
red = "oklch(54, 100, 10)"
green = "oklch(54, 100, 140)"
yellow = "oklch(54, 100, 50)"
blue = "oklch(54, 100, 250)"
magenta = "oklch(54, 100, 310)"
cyan = "oklch(54, 100, 200)"
white = "oklch(100, 0, 0)"

[palette.diff]
red = "oklch(75, 50, 10)"
blue = "oklch(85, 50, 260)"

[palette.bg]
green = "oklch(80, 50, 140)"
orange = "oklch(80, 50, 50)"
yellow = "oklch(80, 50, 100)"
blue = "oklch(80, 50, 250)"
purple = "oklch(80, 50, 310)"
white = "oklch(100, 0, 0)"

#-----------------------------------------------------------------------------
# Workbench colors, merged in order; later sections win
#-----------------------------------------------------------------------------

[workbench.base]
"focusBorder" = "ui.accent"
"errorForeground" = "terminal.red"
"disabledForeground" = "ui.border1"
"foreground" = "ui.fg"
"icon.foreground" = "ui.fg"
"toolbar.hoverBackground" = { color = "ui.border1", alpha = 20 }
"toolbar.activeBackground" = { color = "ui.border1", alpha = 40 }
"widget.border" = "ui.border0"
"widget.shadow" = "ui.shadow"
"input.border" = "ui.border1"
"input.background" = "ui.bg0"
"input.placeholderForeground" = "ui.border1"
"progressBar.background" = "ui.fg"
"inputOption.activeBorder" = "ui.fg"
"pickerGroup.border" = "ui.border0"
"debugToolBar.background" = "ui.bg1"
"tree.indentGuidesStroke" = { color = "ui.fg", alpha = 25 }

[workbench.scrollbar]
"scrollbar.shadow" = "ui.shadow"
"scrollbarSlider.background" = { color = "ui.fg", alpha = 20 }
"scrollbarSlider.hoverBackground" = { color = "ui.fg", alpha = 50 }
"scrollbarSlider.activeBackground" = { color = "ui.fg", alpha = 60 }

[workbench.command_center]
"commandCenter.foreground" = "ui.fg"
"commandCenter.inactiveForeground" = "ui.border0"
"commandCenter.background" = "ui.bg1"
"commandCenter.border" = "ui.border0"
"commandCenter.inactiveBorder" = "ui.border0"
"commandCenter.activeBackground" = "ui.bg1"
"commandCenter.activeBorder" = "ui.border0"

[workbench.list]
"quickInput.background" = "ui.bg1"
"list.errorForeground" = "terminal.red"
"list.warningForeground" = "terminal.yellow"
"list.highlightForeground" = "ui.accent"
"list.focusForeground" = "ui.fg"
"list.focusHighlightForeground" = "ui.bg0"
"list.activeSelectionIconForeground" = "ui.bg0"
"list.activeSelectionForeground" = "ui.bg0"
"list.activeSelectionBackground" = "ui.accent"
"list.inactiveSelectionIconForeground" = "ui.fg"
"list.inactiveSelectionForeground" = "ui.fg"
"list.inactiveSelectionBackground" = { color = "ui.border1", alpha = 15 }
"quickInputList.focusIconForeground" = "ui.bg0"
"quickInputList.focusForeground" = "ui.bg0"
"quickInputList.focusBackground" = "ui.accent"
"list.hoverBackground" = { color = "ui.border1", alpha = 10 }

[workbench.status_bar]
"statusBar.border" = "ui.border0"
"statusBarItem.errorBackground" = "ui.error"
"statusBarItem.errorForeground" = "ui.bg0"
"statusBarItem.errorHoverBackground" = "ui.error"
"statusBarItem.errorHoverForeground" = "ui.bg0"
"statusBarItem.remoteForeground" = "ui.fg"
"statusBarItem.remoteBackground" = "ui.bg1"
"statusBar.background" = "ui.bg1"
"statusBar.debuggingBackground" = "ui.bg1"
"statusBar.noFolderBackground" = "ui.bg1"
"statusBar.foreground" = "ui.fg"

[workbench.badge]
"badge.foreground" = "ui.bg0"
"badge.background" = "ui.accent"

[workbench.menu]
"menu.background" = "ui.bg1"
"menu.foreground" = "ui.fg"
"menu.separatorBackground" = "ui.border0"
"menu.border" = "ui.border0"

[workbench.keybinding]
"keybindingLabel.background" = "transparent"
"keybindingLabel.foreground" = "ui.fg"
"keybindingLabel.border" = "ui.border0"
"keybindingLabel.bottomBorder" = "ui.border0"

[workbench.activity_bar]
"activityBar.border" = "ui.border0"
"activityBar.background" = "ui.bg1"
"activityBar.foreground" = "ui.accent"
"activityBar.inactiveForeground" = "ui.fg"
"activityBarBadge.background" = "ui.accent"
"activityBarBadge.foreground" = "ui.bg0"
"activityBar.activeBorder" = "ui.accent"
"activityBar.activeBackground" = "transparent"
"activityBarTop.activeBorder" = "ui.accent"
"activityBarTop.dropBorder" = "ui.accent"
"activityBarTop.foreground" = "ui.accent"
"activityBarTop.inactiveForeground" = "ui.fg"

[workbench.brackets]
"editorBracketHighlight.foreground1" = "ui.bracket1"
"editorBracketHighlight.foreground2" = "ui.bracket2"
"editorBracketHighlight.foreground3" = "ui.bracket3"
"editorBracketHighlight.foreground4" = "ui.bracket1"
"editorBracketHighlight.foreground5" = "ui.bracket2"
"editorBracketHighlight.foreground6" = "ui.bracket3"
"editorBracketHighlight.unexpectedBracket.foreground" = "ui.error"

[workbench.editor]
"editorWidget.foreground" = "ui.fg"
"editorWidget.background" = "ui.bg1"
"editorWidget.border" = "ui.border1"
"editorWidget.resizeBorder" = "ui.bg1"
"editorBracketMatch.background" = { color = "bg.purple", alpha = 50 }
"editorBracketMatch.border" = "transparent"
"editor.findMatchBackground" = { color = "bg.orange", alpha = 50 }
"editor.findMatchHighlightBackground" = { color = "bg.orange", alpha = 50 }
"editor.findRangeHighlightBackground" = { color = "bg.yellow", alpha = 50 }
"editor.foreground" = "ui.fg"
"editor.background" = "ui.bg0"
"editor.foldBackground" = "transparent"
"editorLink.activeForeground" = "terminal.blue"
"editor.lineHighlightBackground" = { color = "ui.fg", alpha = 5 }
"editor.rangeHighlightBackground" = { color = "bg.yellow", alpha = 25 }
"editor.selectionBackground" = { color = "bg.green", alpha = 30 }
"editor.inactiveSelectionBackground" = { color = "bg.green", alpha = 30 }
"editor.wordHighlightBackground" = { color = "bg.blue", alpha = 50 }
"editor.wordHighlightStrongBackground" = { color = "bg.purple", alpha = 50 }
"editorOverviewRuler.border" = { color = "ui.border0", alpha = 25 }
"editorCursor.foreground" = "ui.cursor"
"editorGroup.border" = "ui.border0"
"editorIndentGuide.background1" = { color = "ui.fg", alpha = 10 }
"editorIndentGuide.activeBackground1" = { color = "ui.fg", alpha = 50 }
"editorLineNumber.foreground" = "ui.border1"
"editorLineNumber.activeForeground" = "ui.fg"
"editorStickyScroll.border" = "ui.border0"
"editorLightBulb.foreground" = "bg.orange"
"editorLightBulbAutoFix.foreground" = "bg.yellow"
"editorRuler.foreground" = { color = "ui.border0", alpha = 50 }
"editorSuggestWidget.border" = "ui.tooltip.border"
"editorSuggestWidget.background" = "ui.tooltip.bg"
"editorHoverWidget.border" = "ui.tooltip.border"
"editorHoverWidget.background" = "ui.tooltip.bg"
"editorGutter.modifiedBackground" = "terminal.magenta"
"editorGutter.addedBackground" = "terminal.blue"
"editorGutter.deletedBackground" = "terminal.red"

[workbench.peek_view]
"peekView.border" = "ui.tooltip.border"
"peekViewTitle.background" = "ui.tooltip.bg"
"peekViewTitleLabel.foreground" = "ui.fg"
"peekViewTitleDescription.foreground" = "ui.fg"
"peekViewEditor.background" = "ui.tooltip.bg"
"peekViewResult.background" = "ui.tooltip.bg"
"peekViewResult.fileForeground" = "ui.fg"
"peekViewResult.lineForeground" = "ui.fg"

[workbench.notifications]
"notificationCenterHeader.foreground" = "ui.fg"
"notificationCenterHeader.background" = "ui.bg1"
"notificationToast.border" = "ui.border1"
"notifications.foreground" = "ui.fg"
"notifications.background" = "ui.bg1"
"notificationLink.foreground" = "ui.link"

[workbench.drag_and_drop]
"list.dropBackground" = { color = "bg.green", alpha = 30 }
"sideBar.dropBackground" = { color = "bg.green", alpha = 30 }
"editorGroup.dropBackground" = { color = "bg.green", alpha = 30 }

[workbench.button]
"button.border" = { color = "#000000", alpha = 60 }
"button.background" = "ui.accent"
"button.foreground" = "ui.bg0"
"button.hoverBackground" = { color = "ui.accent", alpha = 90 }
"button.separator" = { color = "ui.bg0", alpha = 30 }
"button.secondaryBackground" = "ui.bg1"
"button.secondaryForeground" = "ui.fg"
"button.secondaryHoverBackground" = { color = "ui.bg1", alpha = 90 }

[workbench.panels]
"panel.background" = "ui.bg0"
"panel.border" = "ui.border0"
"panelSection.border" = "ui.border0"
"panelSectionHeader.border" = "ui.border0"
"panelTitle.activeBorder" = "ui.accent"
"panelTitle.activeForeground" = "ui.accent"
"panelTitle.inactiveForeground" = "ui.fg"
"sideBar.border" = "ui.border0"
"sideBar.background" = "ui.bg1"
"sideBarSectionHeader.background" = "ui.bg1"
"sideBarSectionHeader.border" = "ui.border0"

[workbench.tabs]
"tab.border" = "ui.border0"
"editorGroupHeader.tabsBorder" = "ui.border0"
"editorGroupHeader.border" = "ui.border0"
"breadcrumb.background" = "ui.bg0"
"editorGroupHeader.noTabsBackground" = "ui.bg0"
"editorGroupHeader.tabsBackground" = "ui.bg1"
"tab.activeBorder" = "ui.border0"
"tab.unfocusedActiveBorder" = "ui.border0"
"tab.activeBorderTop" = "ui.accent"
"tab.unfocusedActiveBorderTop" = "ui.accent"
"tab.activeBackground" = "ui.bg0"
"tab.activeForeground" = "syntax.default"
"tab.inactiveBackground" = "ui.bg1"
"tab.inactiveForeground" = "ui.fg"

[workbench.diff]
"diffEditor.insertedTextBackground" = { color = "diff.blue", alpha = 25 }
"diffEditor.removedTextBackground" = { color = "diff.red", alpha = 25 }
"diffEditor.border" = "ui.border0"
"diffEditor.diagonalFill" = { color = "syntax.default", alpha = 10 }
"diffEditor.insertedLineBackground" = { color = "diff.blue", alpha = 25 }
"diffEditor.removedLineBackground" = { color = "diff.red", alpha = 25 }
"diffEditorGutter.insertedLineBackground" = { color = "diff.blue", alpha = 25 }
"diffEditorGutter.removedLineBackground" = { color = "diff.red", alpha = 25 }
"diffEditorOverview.insertedForeground" = "terminal.blue"
"diffEditorOverview.removedForeground" = "terminal.red"

[workbench.merge]
"merge.currentHeaderBackground" = { color = "diff.blue", alpha = 65 }
"merge.currentContentBackground" = { color = "diff.blue", alpha = 25 }
"merge.incomingHeaderBackground" = { color = "diff.red", alpha = 65 }
"merge.incomingContentBackground" = { color = "diff.red", alpha = 25 }

[workbench.git]
"gitDecoration.modifiedResourceForeground" = "terminal.blue"
"gitDecoration.deletedResourceForeground" = "terminal.red"
"gitDecoration.untrackedResourceForeground" = "terminal.magenta"
"gitDecoration.conflictingResourceForeground" = "terminal.cyan"
"gitDecoration.ignoredResourceForeground" = { color = "ui.fg", alpha = 40 }

[workbench.title_bar]
"titleBar.activeBackground" = "ui.bg1"
"titleBar.activeForeground" = "ui.fg"
"titleBar.inactiveBackground" = "ui.bg1"
"titleBar.inactiveForeground" = "ui.border1"
"titleBar.border" = "ui.border0"

[workbench.dropdown]
"dropdown.background" = "ui.bg0"
"dropdown.listBackground" = "ui.bg0"
"dropdown.border" = "ui.border1"
"dropdown.foreground" = "ui.fg"

[workbench.terminal]
"terminal.tab.activeBorder" = "ui.accent"
"terminal.foreground" = "syntax.default"
"terminal.background" = "ui.bg0"
"terminal.ansiBlack" = "terminal.black"
"terminal.ansiBlue" = "terminal.blue"
"terminal.ansiBrightBlack" = "terminal.black"
"terminal.ansiBrightBlue" = "terminal.blue"
"terminal.ansiBrightCyan" = "terminal.cyan"
"terminal.ansiBrightGreen" = "terminal.green"
"terminal.ansiBrightMagenta" = "terminal.magenta"
"terminal.ansiBrightRed" = "terminal.red"
"terminal.ansiBrightWhite" = "terminal.white"
"terminal.ansiBrightYellow" = "terminal.yellow"
"terminal.ansiCyan" = "terminal.cyan"
"terminal.ansiGreen" = "terminal.green"
"terminal.ansiMagenta" = "terminal.magenta"
"terminal.ansiRed" = "terminal.red"
"terminal.ansiWhite" = "terminal.white"
"terminal.ansiYellow" = "terminal.yellow"

[workbench.welcome]
"textLink.foreground" = "ui.link"
"textLink.activeForeground" = "ui.link"
"textBlockQuote.background" = "transparent"
"textBlockQuote.border" = "syntax.default"
"textPreformat.foreground" = "syntax.string"

[workbench.settings]
"settings.headerForeground" = "ui.fg"
"settings.rowHoverBackground" = { color = "ui.bg1", alpha = 25 }
"settings.modifiedItemIndicator" = "ui.accent"
"settings.dropdownBackground" = "ui.bg0"
"settings.checkboxBackground" = "ui.bg0"
"settings.textInputBackground" = "ui.bg0"
"settings.numberInputBackground" = "ui.bg0"

#-----------------------------------------------------------------------------
# Syntax highlighting
#-----------------------------------------------------------------------------

[tokens]
default = { foreground = "syntax.default" }
keyword = { foreground = "syntax.keyword", font_style = "bold" }
punctuation = { foreground = "syntax.punctuation" }
string = { foreground = "syntax.string" }
string_bold = { foreground = "syntax.string", font_style = "bold" }
comment = { foreground = "syntax.comment", font_style = "italic" }
function = { foreground = "syntax.function" }
property = { foreground = "syntax.property" }
key = { foreground = "syntax.key" }
type = { foreground = "syntax.type" }

[[token_colors]]
scope = ["meta.embedded", "source.groovy.embedded", "string meta.image.inline.markdown"]
style = "default"

[[token_colors]]
scope = "emphasis"
font_style = "italic"

[[token_colors]]
scope = "strong"
font_style = "bold"

[[token_colors]]
scope = "header"
style = "keyword"

[[token_colors]]
scope = ["comment", "punctuation.definition.comment"]
style = "comment"

[[token_colors]]
scope = "constant.language"
style = "string_bold"

[[token_colors]]
scope = "constant.regexp"
style = "string"

[[token_colors]]
name = "JSX tags"
scope = ["support.class.component", "entity.name.tag"]
style = "function"

[[token_colors]]
scope = "entity.name.tag.css"
style = "default"

[[token_colors]]
scope = "entity.other.attribute-name"
style = "key"

[[token_colors]]
scope = [
  "entity.other.attribute-name.class.css",
  "entity.other.attribute-name.class.mixin.css",
  "entity.other.attribute-name.id.css",
  "entity.other.attribute-name.parent-selector.css",
  "source.css.less entity.other.attribute-name.id",
  "entity.other.attribute-name.scss",
]
style = "key"

[[token_colors]]
scope = ["entity.other.attribute-name.pseudo-class.css", "entity.other.attribute-name.pseudo-element.css"]
style = "type"

[[token_colors]]
scope = "invalid"
foreground = "ui.error"

[[token_colors]]
scope = "markup.underline"
foreground = "ui.link"
font_style = "underline"

[[token_colors]]
scope = "markup.bold"
style = "keyword"

[[token_colors]]
scope = "markup.heading"
style = "keyword"

[[token_colors]]
scope = "markup.italic"
style = "keyword"
font_style = "italic"

[[token_colors]]
scope = "markup.strikethrough"
font_style = "strikethrough"

[[token_colors]]
scope = "markup.inserted"
foreground = "terminal.blue"

[[token_colors]]
scope = "markup.deleted"
foreground = "terminal.red"

[[token_colors]]
scope = "markup.changed"
foreground = "terminal.yellow"

[[token_colors]]
scope = "punctuation.definition.quote.begin.markdown"
style = "punctuation"

[[token_colors]]
scope = "punctuation.definition.list.begin.markdown"
style = "punctuation"

[[token_colors]]
scope = "markup.inline.raw"
style = "string"

[[token_colors]]
name = "brackets of XML/HTML tags"
scope = "punctuation.definition.tag"
style = "punctuation"

[[token_colors]]
scope = ["meta.preprocessor", "entity.name.function.preprocessor"]
style = "function"

[[token_colors]]
scope = "meta.preprocessor.string"
style = "string"

[[token_colors]]
scope = ["constant.numeric", "meta.preprocessor.numeric", "entity.other.keyframe-offset.percentage.css"]
style = "string"

[[token_colors]]
scope = "meta.structure.dictionary.key.python"
style = "keyword"

[[token_colors]]
scope = "source.diff"
style = "punctuation"

[[token_colors]]
scope = "meta.diff.header"
foreground = "terminal.white"

[[token_colors]]
scope = "storage"
style = "default"

[[token_colors]]
scope = ["source.java storage.type", "source.go storage.type"]
style = "type"

[[token_colors]]
scope = "storage.type"
style = "keyword"

[[token_colors]]
scope = ["storage.modifier", "keyword.operator.noexcept"]
style = "keyword"

[[token_colors]]
scope = ["string", "meta.embedded.assembly", "constant.other.symbol"]
style = "string"

[[token_colors]]
scope = "string.tag"
style = "keyword"

[[token_colors]]
scope = "string.value"
style = "string"

[[token_colors]]
scope = "string.regexp"
style = "string"

[[token_colors]]
name = "String interpolation"
scope = [
  "punctuation.definition.template-expression.begin",
  "punctuation.definition.template-expression.end",
  "punctuation.section.embedded",
]
style = "punctuation"

[[token_colors]]
name = "Reset string interpolation expression"
scope = ["meta.template.expression", "meta.interpolation"]
style = "default"

[[token_colors]]
scope = [
  "support.type.vendored.property-name",
  "support.type.property-name",
  "variable.css",
  "variable.scss",
  "variable.other.less",
  "source.coffee.embedded",
]
style = "property"

[[token_colors]]
scope = "keyword"
style = "keyword"

[[token_colors]]
scope = "keyword.control"
style = "keyword"

[[token_colors]]
scope = ["keyword.operator.type.annotation"]
style = "punctuation"

[[token_colors]]
scope = ["keyword.operator"]
style = "punctuation"

[[token_colors]]
scope = [
  "keyword.operator.new",
  "keyword.operator.expression",
  "keyword.operator.cast",
  "keyword.operator.sizeof",
  "keyword.operator.alignof",
  "keyword.operator.typeid",
  "keyword.operator.alignas",
  "keyword.operator.instanceof",
  "keyword.operator.logical.python",
  "keyword.operator.wordlike",
]
style = "keyword"

[[token_colors]]
scope = "keyword.other.unit"
style = "string_bold"

[[token_colors]]
scope = ["punctuation.section.embedded.begin.php", "punctuation.section.embedded.end.php"]
style = "punctuation"

[[token_colors]]
name = "coloring of the Java import and package identifiers"
scope = ["storage.modifier.import.java", "variable.language.wildcard.java", "storage.modifier.package.java"]
style = "default"

[[token_colors]]
name = "self"
scope = "variable.language"
style = "string_bold"

[[token_colors]]
name = "Properties"
scope = ["meta.attribute", "variable.other.property", "variable.other.object.property"]
style = "property"

[[token_colors]]
name = "Functions"
scope = [
  "entity.name.function",
  "meta.function-call.generic",
  "support.function",
  "support.constant.handlebars",
  "source.powershell variable.other.member",
  "entity.name.operator.custom-literal",
]
style = "function"

[[token_colors]]
name = "Types declaration and references"
scope = [
  "support.class",
  "support.type",
  "entity.name.type",
  "entity.name.namespace",
  "entity.other.attribute",
  "entity.name.scope-resolution",
  "entity.name.class",
]
style = "type"

[[token_colors]]
name = "Types declaration and references, TS grammar specific"
scope = [
  "meta.type.cast.expr",
  "meta.type.new.expr",
  "support.constant.math",
  "support.constant.dom",
  "support.constant.json",
  "entity.other.inherited-class",
]
style = "type"

[[token_colors]]
name = "Control flow / Special keywords"
scope = [
  "keyword.control",
  "source.cpp keyword.operator.new",
  "keyword.operator.delete",
  "keyword.other.using",
  "keyword.other.operator",
  "entity.name.operator",
]
style = "keyword"

[[token_colors]]
name = "Variable name"
scope = ["variable", "meta.definition.variable.name", "support.variable", "entity.name.variable"]
style = "default"

[[token_colors]]
name = "Parameter name"
scope = ["variable.parameter"]
style = "key"

[[token_colors]]
name = "Object keys, TS grammar specific"
scope = ["meta.object-literal.key", "variable.object.property"]
style = "key"

[[token_colors]]
name = "CSS property value"
scope = [
  "support.constant.property-value",
  "support.constant.font-name",
  "support.constant.media-type",
  "support.constant.media",
  "constant.other.color.rgb-value",
  "constant.other.rgb-value",
  "support.constant.color",
]
style = "string_bold"

[[token_colors]]
name = "String placeholders"
scope = ["constant.other.placeholder"]
style = "keyword"

[[token_colors]]
name = "Regular expression groups"
scope = [
  "punctuation.definition.group.regexp",
  "punctuation.definition.group.assertion.regexp",
  "punctuation.definition.character-class.regexp",
  "punctuation.character.set.begin.regexp",
  "punctuation.character.set.end.regexp",
  "keyword.operator.negation.regexp",
  "support.other.parenthesis.regexp",
]
style = "property"

[[token_colors]]
scope = [
  "constant.character.character-class.regexp",
  "constant.other.character-class.set.regexp",
  "constant.other.character-class.regexp",
  "constant.character.set.regexp",
]
style = "property"

[[token_colors]]
scope = ["keyword.operator.or.regexp", "keyword.control.anchor.regexp"]
style = "property"

[[token_colors]]
scope = "keyword.operator.quantifier.regexp"
style = "property"

[[token_colors]]
scope = ["constant.character", "constant.other.option"]
style = "property"

[[token_colors]]
scope = "constant.character.escape"
style = "property"

[[token_colors]]
scope = "entity.name.label"
style = "default"

[[token_colors]]
scope = ["punctuation", "meta.brace"]
style = "punctuation"

#-----------------------------------------------------------------------------
# Contrast checks, reported in this order
#-----------------------------------------------------------------------------

[[checks]]
class = "text"
foreground = ["ui.error", "ui.fg", "ui.link", "ui.accent"]
background = ["ui.bg0", "ui.bg1"]

[[checks]]
class = "decoration"
foreground = "ui.border0"
background = ["ui.bg0", "ui.bg1"]

[[checks]]
class = "ui"
foreground = "ui.border1"
background = ["ui.bg0", "ui.bg1"]

[[checks]]
class = "text"
foreground = "syntax.*"
background = "ui.bg0"

[[checks]]
class = "text"
foreground = "terminal.*"
background = "ui.bg0"
except = ["terminal.white"]

[[checks]]
class = "text"
foreground = ["ui.bracket1", "ui.bracket2", "ui.bracket3"]
background = "ui.bg0"
"##;

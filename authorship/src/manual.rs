/*!

This is the long-form manual for `authorship` and `authorlist`.

## Input layouts

The following spreadsheet layouts are supported:
* `hoyt` one row per author, columns at fixed positions
* `obo` named author columns and a separate table of institution codes

### `hoyt`

The names in the header row are not significant, only the positions of the columns:

| column | content |
|--------|---------|
| A, B, C | first name, middle name or initial (optional), last name |
| D | role: `Lead`, `Senior` or empty |
| E, F | email, ORCID |
| G | Wikidata URL of the author |
| H | Twitter handle |
| I, J, K | first affiliation: name, address, ROR or Wikidata URL |
| L, M, N | second affiliation: name, address, ROR or Wikidata URL |
| O | conflicts of interest |

The authors are reordered: the `Lead` authors come first, the `Senior` authors
come last and everyone else sits in between. Within each of these groups the
authors are sorted by last name. Use `--no-sort-middle` (or
`"sortMiddleAuthors": false`) to keep the order of the sheet within each group.

Institutions are identified by their name. When the same name appears with
different addresses, the last one is used.

### `obo`

The authors are found in the columns `First name`, `Middle (optional)`,
`Last name`, `Email`, `ORCID`, `Wikidata`, `Twitter` and
`Organization + location (will separate later)`. The last column lists the
codes of the institutions of the author, separated by commas:

```text
First name,...,Organization + location (will separate later),,Code,Institution
Nico,...,"1, 2",,1,"Semanticly Ltd, London, UK"
Charles,...,2,,2,Harvard Medical School
```

The last two columns of the sheet map each code to the name of an institution.
Codes that cannot be found are reported as a warning and ignored, but every
author needs at least one institution. The order of the rows is kept.

## Output formats

* `text` plain text with superscript numbers
* `biorxiv` the tab-separated file for the bulk author upload of bioRxiv
* `scientific_data` LaTeX with the `authblk` package (Nature Scientific Data)
* `oxford_bioinformatics` LaTeX for the Oxford Bioinformatics template
* `citation_cff` the `authors` section of a `CITATION.cff` file

The affiliations are numbered in the order in which they appear in the author list.

The corresponding author is the author with the role `Senior`. The
`oxford_bioinformatics` format fails when there is no such author, or when
that author has no email.

## Configuration

`authorlist` accepts a configuration file in JSON:

```json
{
  "source": {
    "provider": "googleSheets",
    "sheetId": "1Fo1YH3ZzOVrQ4wzKnBm6sPha5hZG66-u-uSMDGUvguI",
    "gid": "0",
    "skipRows": 1,
    "layout": "hoyt"
  },
  "output": {
    "writer": "biorxiv",
    "outputPath": "biorxiv.tsv"
  }
}
```

Options for `source`:
 - `provider` (string, optional): `csv`, `tsv`, `excel` or `googleSheets`. If not provided, it is
   guessed from the extension of the file.
 - `filePath` (string): the input file, relative to the configuration file.
 - `sheetId`, `gid` (strings): the Google Sheet to download, for the `googleSheets` provider.
 - `skipRows` (number, optional): the number of rows to skip before the header row.
 - `excelWorksheetName` (string, optional): for Excel inputs, the name of the worksheet.
   The first worksheet is used otherwise.
 - `layout` (string, optional, default `hoyt`): `hoyt` or `obo`.
 - `sortMiddleAuthors` (boolean, optional, default true).

Options for `output`:
 - `writer` (string, optional, default `text`): one of the output formats.
 - `outputPath` (string, optional): where to write the output. The standard output is used otherwise.

All the options can also be set on the command line, which takes precedence over the configuration file.

 */

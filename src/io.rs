/*!
# IO

Reading capacity graphs from text.

The only supported format is a plain edge list: one `from to capacity` triple per line.
Vertices are declared implicitly the first time they appear, so the graph's vertex set is
exactly the set of endpoints in the file.
*/

pub mod edge_list;

pub use edge_list::{read_edge_list, read_edge_list_file, EdgeListReader};

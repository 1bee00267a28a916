use prettytable::{format::consts::FORMAT_BOX_CHARS, Cell, Row, Table as Grid};
use std::{
    any::type_name,
    fmt::{Display, Formatter, Result},
};

use crate::core::{matrix::Matrix, table::Table, vector::Vector};

const UNINITIALIZED: &str = "<uninitialized>";

fn summary<T>(name: &str, table: &Table<T>, f: &mut Formatter<'_>) -> Result {
    let mut debug = f.debug_struct(name);
    debug.field("dtype", &type_name::<T>());

    match &table.storage {
        Some(storage) => debug
            .field("shape", &storage.shape.as_tuple())
            .field("elems", &storage.data.len()),
        None => debug.field("state", &UNINITIALIZED),
    };

    debug.finish()
}

fn grid<T: Display>(table: &Table<T>, f: &mut Formatter<'_>) -> Result {
    let Some(storage) = &table.storage else {
        return writeln!(f, "{UNINITIALIZED}");
    };

    let cols = storage.shape.cols;
    let rows = (0..storage.shape.rows)
        .map(|row| {
            let start = row * cols;
            Row::new(
                storage.data[start..start + cols]
                    .iter()
                    .map(|elem| Cell::new(&elem.to_string()))
                    .collect(),
            )
        })
        .collect();

    let mut grid = Grid::init(rows);
    grid.set_format(*FORMAT_BOX_CHARS);

    write!(f, "{}", grid)
}

macro_rules! dump {
    ($type:ident $(, $field:ident)?) => {
        impl<T> std::fmt::Debug for $type<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                summary(stringify!($type), &self$(.$field)?, f)
            }
        }

        impl<T: Display> Display for $type<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                grid(&self$(.$field)?, f)?;
                writeln!(f, "{:?}", self)
            }
        }
    };
}

dump!(Table);
dump!(Matrix, table);
dump!(Vector, table);

#[cfg(test)]
mod tests {
    use crate::{Matrix, Table, Vector};

    #[test]
    fn dump_initialized() -> anyhow::Result<()> {
        let m = Matrix::new(&[1, 22, 333, 4], 2, 2)?;
        let dump = m.to_string();

        for elem in ["1", "22", "333", "4"] {
            assert!(dump.contains(elem));
        }
        assert!(dump.contains("Matrix"));
        assert!(dump.contains("(2, 2)"));
        assert!(!dump.contains("uninitialized"));

        Ok(())
    }

    #[test]
    fn dump_uninitialized() {
        let dump = Table::<f32>::empty().to_string();
        assert!(dump.starts_with("<uninitialized>"));

        let debug = format!("{:?}", Vector::<f32>::empty());
        assert!(debug.contains("Vector"));
        assert!(debug.contains("uninitialized"));
    }

    #[test]
    fn dump_degenerate_shape() -> anyhow::Result<()> {
        let dump = Table::<u8>::zeroes(0, 3)?.to_string();
        assert!(dump.contains("(0, 3)"));

        Ok(())
    }
}

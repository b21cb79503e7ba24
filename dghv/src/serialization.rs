use std::io::{Error, ErrorKind, Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use rug::{Integer, integer::Order};

use crate::{
    ciphertext::Ciphertext,
    keys::{PrivateKey, PublicKey},
    params::{MAX_TAU, Parameters},
};

pub trait WriterTo {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()>;
}

pub trait ReaderFrom {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<()>;
}

const SIGN_POSITIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

/// Writes `x` as a sign byte, the u64 byte length of its magnitude, and the
/// magnitude bytes, least significant first.
pub fn write_integer<W: Write>(x: &Integer, writer: &mut W) -> Result<()> {
    let sign: u8 = if *x < 0 { SIGN_NEGATIVE } else { SIGN_POSITIVE };
    let bytes: Vec<u8> = x.to_digits::<u8>(Order::Lsf);
    writer.write_u8(sign)?;
    writer.write_u64::<LittleEndian>(bytes.len() as u64)?;
    writer.write_all(&bytes)
}

pub fn read_integer<R: Read>(reader: &mut R) -> Result<Integer> {
    let sign: u8 = reader.read_u8()?;
    let len: u64 = reader.read_u64::<LittleEndian>()?;

    // Never allocates past the bytes actually present in the stream.
    let mut bytes: Vec<u8> = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut bytes)?;
    if bytes.len() as u64 != len {
        return Err(Error::new(ErrorKind::UnexpectedEof, "truncated integer"));
    }

    let x: Integer = Integer::from_digits(&bytes, Order::Lsf);
    match sign {
        SIGN_POSITIVE => Ok(x),
        SIGN_NEGATIVE => Ok(-x),
        _ => Err(Error::new(ErrorKind::InvalidData, "invalid sign tag")),
    }
}

impl WriterTo for Parameters {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.to_words()
            .iter()
            .try_for_each(|w| writer.write_u64::<LittleEndian>(*w))
    }
}

impl Parameters {
    /// Reads and re-validates a parameter set written with [WriterTo::write_to].
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut words: [usize; 7] = [0; 7];
        for w in words.iter_mut() {
            *w = usize::try_from(reader.read_u64::<LittleEndian>()?).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        }
        let [gamma, eta, rho, rho_prime, tau, sec, alpha] = words;
        Parameters::new(gamma, eta, rho, rho_prime, tau, sec, alpha).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }
}

impl WriterTo for PrivateKey {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u64::<LittleEndian>(self.params_id)?;
        write_integer(&self.p, writer)
    }
}

impl ReaderFrom for PrivateKey {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.params_id = reader.read_u64::<LittleEndian>()?;
        self.p = read_integer(reader)?;
        Ok(())
    }
}

impl WriterTo for PublicKey {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u64::<LittleEndian>(self.params_id)?;
        write_integer(&self.seed, writer)?;
        write_integer(&self.x0, writer)?;
        writer.write_u64::<LittleEndian>(self.deltas.len() as u64)?;
        self.deltas
            .iter()
            .try_for_each(|delta| write_integer(delta, writer))
    }
}

impl ReaderFrom for PublicKey {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.params_id = reader.read_u64::<LittleEndian>()?;
        self.seed = read_integer(reader)?;
        self.x0 = read_integer(reader)?;
        let tau: u64 = reader.read_u64::<LittleEndian>()?;
        if tau > MAX_TAU {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("tau={} exceeds {}", tau, MAX_TAU),
            ));
        }
        self.deltas.clear();
        for _ in 0..tau {
            self.deltas.push(read_integer(reader)?);
        }
        Ok(())
    }
}

impl WriterTo for Ciphertext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_integer(&self.data, writer)
    }
}

impl ReaderFrom for Ciphertext {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.data = read_integer(reader)?;
        Ok(())
    }
}
